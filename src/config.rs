use std::env;
use crate::error::VizError;

pub const DEFAULT_SIZE: usize = 50;
pub const VALUE_MIN: i32 = 5;
pub const VALUE_MAX: i32 = 104;

pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 200.0;
pub const DEFAULT_SPEED: f64 = 5.0;

// frames per second of the terminal driver
pub const FRAME_RATE: u32 = 60;

// bar geometry
pub const BAR_AREA_PADDING: f32 = 20.0;
pub const MIN_BAR_HEIGHT: f32 = 2.0;
pub const BAR_SCALE: i32 = VALUE_MAX + 1;
pub const LABEL_MAX_SIZE: usize = 20;
pub const WIDE_GAP_MAX_SIZE: usize = 50;

const _: () = {
    assert!(VALUE_MIN > 0, "VALUE_MIN must leave room for a visible bar");
    assert!(VALUE_MIN <= VALUE_MAX, "empty value range");
    assert!(DEFAULT_SIZE > 0, "DEFAULT_SIZE must be positive");
};

pub const ENV_SIZE: &str = "ALGOWIZZ_SIZE";
pub const ENV_SPEED: &str = "ALGOWIZZ_SPEED";
pub const ENV_SEED: &str = "ALGOWIZZ_SEED";

/// Runtime settings for a [`SortState`](crate::SortState).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub size: usize,
    pub speed: f64,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: DEFAULT_SIZE,
            speed: DEFAULT_SPEED,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config, VizError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Config, VizError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup(ENV_SIZE) {
            config.size = parse_value(ENV_SIZE, &raw)?;
            if config.size == 0 {
                return Err(VizError::EmptyArray);
            }
        }
        if let Some(raw) = lookup(ENV_SPEED) {
            let speed: f64 = parse_value(ENV_SPEED, &raw)?;
            config.speed = clamp_speed(speed)?;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = Some(parse_value(ENV_SEED, &raw)?);
        }

        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, VizError> {
    raw.trim().parse().map_err(|_| VizError::InvalidConfig {
        key,
        value: raw.to_string(),
    })
}

pub fn clamp_speed(speed: f64) -> Result<f64, VizError> {
    if !speed.is_finite() {
        return Err(VizError::InvalidSpeed(speed));
    }
    Ok(speed.clamp(MIN_SPEED, MAX_SPEED))
}
