use std::{path::PathBuf, str::FromStr, time::Duration};

use tracing::Level;

use crate::{generators::Generator, solvers::Solver};

/// Smallest width or height accepted from the prompt.
pub const MIN_DIMENSION: usize = 5;
/// Largest width or height accepted from the prompt.
pub const MAX_DIMENSION: usize = 50;
/// Used when the requested dimensions are rejected.
pub const DEFAULT_DIMENSIONS: (usize, usize) = (21, 21);

const SEED_VAR: &str = "MAZECRAFT_SEED";
const DELAY_VAR: &str = "MAZECRAFT_DELAY_MS";
const LOG_LEVEL_VAR: &str = "MAZECRAFT_LOG_LEVEL";
const LOG_DIR_VAR: &str = "MAZECRAFT_LOG_DIR";
const BANNER_VAR: &str = "MAZECRAFT_BANNER";

/// Runtime settings for the binaries.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub width: usize,
    pub height: usize,
    pub generator: Generator,
    pub solver: Solver,
    /// Seed for the maze generator; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Pause after each rendered step
    pub delay: Duration,
    pub log_level: Level,
    pub log_dir: PathBuf,
    /// Character grid shown once at startup
    pub banner: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSIONS.0,
            height: DEFAULT_DIMENSIONS.1,
            generator: Generator::default(),
            solver: Solver::default(),
            seed: None,
            delay: Duration::from_millis(5),
            log_level: Level::INFO,
            log_dir: PathBuf::from("."),
            banner: None,
        }
    }
}

impl Settings {
    /// Defaults overridden by the `MAZECRAFT_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable source. Values that fail to parse are
    /// ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(seed) = parse_var::<u64>(&lookup, SEED_VAR) {
            settings.seed = Some(seed);
        }
        if let Some(ms) = parse_var::<u64>(&lookup, DELAY_VAR) {
            settings.delay = Duration::from_millis(ms);
        }
        if let Some(level) = parse_var::<Level>(&lookup, LOG_LEVEL_VAR) {
            settings.log_level = level;
        }
        if let Some(dir) = lookup(LOG_DIR_VAR).filter(|s| !s.is_empty()) {
            settings.log_dir = PathBuf::from(dir);
        }
        settings.banner = lookup(BANNER_VAR)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        settings
    }

    /// Accepts odd dimensions within the prompt limits and falls back to the defaults
    /// otherwise.
    pub fn validated_dimensions(width: usize, height: usize) -> (usize, usize) {
        let valid = |d: usize| (MIN_DIMENSION..=MAX_DIMENSION).contains(&d) && d % 2 == 1;
        if valid(width) && valid(height) {
            (width, height)
        } else {
            tracing::warn!(
                "[config] invalid dimensions {}x{}, using {}x{}",
                width,
                height,
                DEFAULT_DIMENSIONS.0,
                DEFAULT_DIMENSIONS.1
            );
            DEFAULT_DIMENSIONS
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("[config] ignoring invalid value {:?} for {}", raw, key);
            None
        }
    }
}
