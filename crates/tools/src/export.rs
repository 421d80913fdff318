use std::fs;
use std::io;
use std::path::Path;

use maze_core::{Cell, MazeSession, format_fingerprint};
use serde::{Deserialize, Serialize};

pub const EXPORT_FORMAT_VERSION: u32 = 1;

/// JSON snapshot of one generated maze and its search result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MazeExport {
    pub format_version: u32,
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub fingerprint_hex: String,
    pub start: Cell,
    pub end: Cell,
    /// Each wall as the pair of cells it separates.
    pub walls: Vec<[Cell; 2]>,
    pub path: Option<Vec<Cell>>,
    pub explored: Vec<Cell>,
}

impl MazeExport {
    pub fn from_session(session: &MazeSession) -> Self {
        let walls = session
            .maze()
            .walls()
            .iter()
            .map(|wall| {
                let (a, b) = wall.cells();
                [a, b]
            })
            .collect();

        Self {
            format_version: EXPORT_FORMAT_VERSION,
            width: session.width(),
            height: session.height(),
            seed: session.seed(),
            fingerprint_hex: format_fingerprint(session.maze().fingerprint()),
            start: session.start(),
            end: session.end(),
            walls,
            path: session.path().map(<[Cell]>::to_vec),
            explored: session.explored().to_vec(),
        }
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
