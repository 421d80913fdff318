//! Window configuration and launch settings for the desktop app.

use std::env;
use std::sync::OnceLock;

use clap::Parser;
use macroquad::window::Conf;
use maze_app::{APP_NAME, init_logging};
use maze_app::cell_size::{CELL_SIZE_ENV, resolve_cell_size};
use maze_app::screen_layout::window_size_for;
use maze_app::settings_file::{SETTINGS_FORMAT_VERSION, ViewerSettingsFile};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Interactive A* maze viewer", long_about = None)]
pub struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,
    /// Maze height in cells
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,
    /// Cell size in pixels; overrides MAZE_CELL_SIZE and the saved setting
    #[arg(long)]
    pub cell_size: Option<f32>,
    /// Pin the maze seed; a fresh one is chosen when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Settings fixed for the lifetime of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: f32,
    pub show_exploration: bool,
    /// Cell size written back on save; flag and env overrides only last one launch.
    pub saved_cell_size: f32,
}

impl LaunchConfig {
    pub fn resolve(
        args: &Args,
        env_override: Option<&str>,
        saved: Option<&ViewerSettingsFile>,
    ) -> Self {
        let saved_size = saved.map(|file| file.cell_size);
        Self {
            width: args.width as usize,
            height: args.height as usize,
            cell_size: resolve_cell_size(args.cell_size, env_override, saved_size),
            show_exploration: saved.is_none_or(|file| file.show_exploration),
            saved_cell_size: resolve_cell_size(None, None, saved_size),
        }
    }

    pub fn settings_to_save(&self, show_exploration: bool) -> ViewerSettingsFile {
        ViewerSettingsFile {
            format_version: SETTINGS_FORMAT_VERSION,
            cell_size: self.saved_cell_size,
            show_exploration,
        }
    }
}

/// Parsed flags and the launch settings resolved from them, built once per process.
pub struct Startup {
    pub args: Args,
    pub launch: LaunchConfig,
}

static STARTUP: OnceLock<Startup> = OnceLock::new();

impl Startup {
    /// Logging comes up before the settings file is read so its warnings are not lost.
    pub fn prepare(
        args: Args,
        init_logging: impl FnOnce(),
        env_override: Option<&str>,
        load_saved: impl FnOnce() -> Option<ViewerSettingsFile>,
    ) -> Self {
        init_logging();
        let saved = load_saved();
        let launch = LaunchConfig::resolve(&args, env_override, saved.as_ref());
        Self { args, launch }
    }

    /// Shared by `window_conf` and `main`, which macroquad calls in that order.
    pub fn get() -> &'static Startup {
        STARTUP.get_or_init(|| {
            let override_value = env::var(CELL_SIZE_ENV).ok();
            Self::prepare(
                Args::parse(),
                init_logging,
                override_value.as_deref(),
                ViewerSettingsFile::load_default,
            )
        })
    }
}

pub fn build_window_conf(launch: &LaunchConfig) -> Conf {
    let (width, height) = window_size_for(launch.width, launch.height, launch.cell_size);
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: width.round() as i32,
        window_height: height.round() as i32,
        // Logical pixels keep mouse positions and drawing in the same space.
        high_dpi: false,
        window_resizable: false,
        ..Default::default()
    }
}

pub fn display_cell_size_notice(launch: &LaunchConfig) -> String {
    let override_label = env::var(CELL_SIZE_ENV).unwrap_or_else(|_| "unset".to_string());
    format!("Cell size: {:.0}px {CELL_SIZE_ENV}={override_label}", launch.cell_size)
}
