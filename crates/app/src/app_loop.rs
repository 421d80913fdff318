use macroquad::prelude::KeyCode;
use maze_core::{CellGeometry, MazeSession};

use crate::seed::{SeedStream, parse_seed_input};

/// Explored cells revealed per frame while the search animation runs.
pub const ANIMATION_STEPS_PER_FRAME: usize = 1;

/// Everything the window reported for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    pub chars_typed: Vec<char>,
    /// Left click position in window pixels.
    pub click: Option<(f32, f32)>,
}

impl FrameInput {
    pub fn keys(keys: &[KeyCode]) -> Self {
        Self { keys_pressed: keys.to_vec(), ..Default::default() }
    }

    pub fn click(x: f32, y: f32) -> Self {
        Self { click: Some((x, y)), ..Default::default() }
    }

    fn pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }
}

#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub enum AppMode {
    #[default]
    Idle,
    SelectingStart,
    SelectingEnd,
    EnteringSeed {
        buffer: String,
    },
    Animating,
}

pub struct AppState {
    pub mode: AppMode,
    pub show_exploration: bool,
    /// Seed used by `R`; `None` draws a fresh one from the stream.
    pub pinned_seed: Option<u64>,
    pub quit_requested: bool,
    /// Set when a persisted viewer setting changed this frame.
    pub settings_changed: bool,
    seed_stream: SeedStream,
}

impl AppState {
    pub fn new(pinned_seed: Option<u64>, stream_origin: u64, show_exploration: bool) -> Self {
        Self {
            mode: AppMode::Idle,
            show_exploration,
            pinned_seed,
            quit_requested: false,
            settings_changed: false,
            seed_stream: SeedStream::new(stream_origin),
        }
    }

    /// Process input and logic for a single frame.
    pub fn tick(&mut self, session: &mut MazeSession, geometry: &CellGeometry, input: &FrameInput) {
        self.settings_changed = false;

        match &mut self.mode {
            AppMode::EnteringSeed { buffer } => {
                if input.pressed(KeyCode::Escape) {
                    log::info!("seed entry cancelled");
                    self.mode = AppMode::Idle;
                } else if input.pressed(KeyCode::Enter) || input.pressed(KeyCode::KpEnter) {
                    let buffer = buffer.clone();
                    self.confirm_seed(session, &buffer);
                } else {
                    if input.pressed(KeyCode::Backspace) {
                        buffer.pop();
                    }
                    buffer.extend(input.chars_typed.iter().filter(|c| c.is_ascii_digit()));
                }
                return;
            }
            AppMode::Animating => {
                if input.pressed(KeyCode::Q) {
                    self.quit_requested = true;
                    return;
                }
                if session.advance_animation(ANIMATION_STEPS_PER_FRAME) {
                    self.mode = AppMode::Idle;
                }
                return;
            }
            AppMode::Idle | AppMode::SelectingStart | AppMode::SelectingEnd => {}
        }

        if input.pressed(KeyCode::Q) {
            self.quit_requested = true;
            return;
        }
        if input.pressed(KeyCode::R) {
            self.regenerate(session);
        }
        if input.pressed(KeyCode::S) {
            self.mode = AppMode::SelectingStart;
        }
        if input.pressed(KeyCode::E) {
            self.mode = AppMode::SelectingEnd;
        }
        if input.pressed(KeyCode::A) {
            self.show_exploration = !self.show_exploration;
            self.settings_changed = true;
        }
        if input.pressed(KeyCode::D) {
            let buffer = self.pinned_seed.map(|seed| seed.to_string()).unwrap_or_default();
            self.mode = AppMode::EnteringSeed { buffer };
            return;
        }
        if input.pressed(KeyCode::Space) {
            session.start_animation();
            log::info!("animating search over {} explored cells", session.explored().len());
            self.mode = AppMode::Animating;
            return;
        }

        if let Some((px, py)) = input.click {
            self.handle_click(session, geometry, px, py);
        }
    }

    fn handle_click(
        &mut self,
        session: &mut MazeSession,
        geometry: &CellGeometry,
        px: f32,
        py: f32,
    ) {
        let Some(cell) = geometry.pixel_to_cell(px, py) else {
            return;
        };
        let result = match self.mode {
            AppMode::SelectingStart => session.set_start(cell),
            AppMode::SelectingEnd => session.set_end(cell),
            _ => return,
        };
        match result {
            Ok(()) => {
                log::info!("endpoints now {} -> {}", session.start(), session.end());
                self.mode = AppMode::Idle;
            }
            Err(err) => log::warn!("ignored click: {err}"),
        }
    }

    fn regenerate(&mut self, session: &mut MazeSession) {
        let seed = self.pinned_seed.unwrap_or_else(|| self.seed_stream.next_seed());
        session.regenerate(seed);
        log::info!("regenerated {}x{} maze with seed {seed}", session.width(), session.height());
    }

    fn confirm_seed(&mut self, session: &mut MazeSession, buffer: &str) {
        match parse_seed_input(buffer) {
            Ok(seed) => {
                self.pinned_seed = seed;
                self.mode = AppMode::Idle;
                self.regenerate(session);
            }
            Err(err) => {
                log::warn!("{err}");
                let buffer = self.pinned_seed.map(|seed| seed.to_string()).unwrap_or_default();
                self.mode = AppMode::EnteringSeed { buffer };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (AppState, MazeSession, CellGeometry) {
        let session = MazeSession::new(4, 4, 9).expect("valid");
        let geometry = CellGeometry::new(4, 4, 10.0, 0.0);
        (AppState::new(None, 1, true), session, geometry)
    }

    #[test]
    fn quit_key_requests_exit() {
        let (mut app, mut session, geometry) = fixture();
        app.tick(&mut session, &geometry, &FrameInput::keys(&[KeyCode::Q]));
        assert!(app.quit_requested);
    }

    #[test]
    fn toggle_exploration_marks_settings_changed_for_one_frame() {
        let (mut app, mut session, geometry) = fixture();
        app.tick(&mut session, &geometry, &FrameInput::keys(&[KeyCode::A]));
        assert!(!app.show_exploration);
        assert!(app.settings_changed);
        app.tick(&mut session, &geometry, &FrameInput::default());
        assert!(!app.settings_changed);
    }

    #[test]
    fn seed_entry_confirm_pins_seed_and_regenerates() {
        let (mut app, mut session, geometry) = fixture();
        app.tick(&mut session, &geometry, &FrameInput::keys(&[KeyCode::D]));
        assert_eq!(app.mode, AppMode::EnteringSeed { buffer: String::new() });

        let typed = FrameInput { chars_typed: vec!['4', 'x', '2'], ..Default::default() };
        app.tick(&mut session, &geometry, &typed);
        assert_eq!(app.mode, AppMode::EnteringSeed { buffer: "42".to_string() });

        app.tick(&mut session, &geometry, &FrameInput::keys(&[KeyCode::Enter]));
        assert_eq!(app.mode, AppMode::Idle);
        assert_eq!(app.pinned_seed, Some(42));
        assert_eq!(session.seed(), 42);
    }

    #[test]
    fn click_outside_grid_keeps_waiting() {
        let (mut app, mut session, geometry) = fixture();
        app.tick(&mut session, &geometry, &FrameInput::keys(&[KeyCode::E]));
        app.tick(&mut session, &geometry, &FrameInput::click(500.0, 500.0));
        assert_eq!(app.mode, AppMode::SelectingEnd);
        assert_eq!(session.end(), maze_core::Cell::new(3, 3));
    }
}
