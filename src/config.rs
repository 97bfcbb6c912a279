use std::path::PathBuf;
use std::time::Duration;

// Earth measurements (in kilometers)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// Feedback gradient: one colour step per this many kilometers
pub const COLOR_STEP_KM: f64 = 30.0;

// Globe view
pub const GRATICULE_STEP_DEG: f64 = 30.0;
pub const ROTATE_STEP_DEG: f64 = 10.0;
pub const DEFAULT_SPIN_DEG_PER_SEC: f64 = 6.0;
pub const DEFAULT_STAR_COUNT: usize = 180;
pub const DEFAULT_TICK_MS: u64 = 50;

// Longest catalog name is well under this
pub const MAX_INPUT_CHARS: usize = 64;

/// Runtime settings collected from the command line.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Seed for target selection and the starfield. `None` draws from the OS.
    pub seed: Option<u64>,
    /// Fixed target country, mostly for demos and debugging.
    pub target: Option<String>,
    pub tick_rate: Duration,
    pub spin_deg_per_sec: f64,
    pub star_count: usize,
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            target: None,
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            spin_deg_per_sec: DEFAULT_SPIN_DEG_PER_SEC,
            star_count: DEFAULT_STAR_COUNT,
            log_file: None,
        }
    }
}
