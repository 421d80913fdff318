//! Persistent viewer settings. Mazes and seeds are never saved.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;
use crate::cell_size::DEFAULT_CELL_SIZE;

pub const SETTINGS_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ViewerSettingsFile {
    pub format_version: u32,
    pub cell_size: f32,
    pub show_exploration: bool,
}

impl Default for ViewerSettingsFile {
    fn default() -> Self {
        Self {
            format_version: SETTINGS_FORMAT_VERSION,
            cell_size: DEFAULT_CELL_SIZE,
            show_exploration: true,
        }
    }
}

impl ViewerSettingsFile {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("viewer_settings.json");
            path
        })
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
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
        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if settings.format_version != SETTINGS_FORMAT_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported settings format version {}", settings.format_version),
            ));
        }
        Ok(settings)
    }

    /// Saved settings, or `None` when the file is missing or unreadable.
    pub fn load_default() -> Option<Self> {
        let path = Self::get_default_path()?;
        match Self::load(&path) {
            Ok(settings) => Some(settings),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                log::warn!("ignoring viewer settings at {}: {err}", path.display());
                None
            }
        }
    }
}
