//! Cell size model: clamping and resolution across flag, environment, and saved settings.

pub const DEFAULT_CELL_SIZE: f32 = 40.0;
pub const MIN_CELL_SIZE: f32 = 10.0;
pub const MAX_CELL_SIZE: f32 = 80.0;
pub const CELL_SIZE_ENV: &str = "MAZE_CELL_SIZE";

pub fn clamp_cell_size(value: f32) -> f32 {
    if !value.is_finite() {
        return DEFAULT_CELL_SIZE;
    }
    value.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
}

/// Flag wins, then the environment override, then the saved value.
pub fn resolve_cell_size(
    flag: Option<f32>,
    env_override: Option<&str>,
    persisted: Option<f32>,
) -> f32 {
    let finite = |value: &f32| value.is_finite();
    if let Some(size) = flag.filter(finite) {
        return clamp_cell_size(size);
    }
    let override_size =
        env_override.and_then(|raw| raw.trim().parse::<f32>().ok()).filter(finite);
    if let Some(size) = override_size {
        return clamp_cell_size(size);
    }
    if let Some(size) = persisted.filter(finite) {
        return clamp_cell_size(size);
    }
    DEFAULT_CELL_SIZE
}
