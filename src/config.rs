//! Session configuration
//!
//! [`Config`] holds the validated startup settings. The binary fills it from
//! command-line flags; tests build it directly.

use crate::run::constants::{
    DEFAULT_ARRAY_SIZE, DEFAULT_CIRCULAR_CAPACITY, DEFAULT_SPEED_MS, MAX_ARRAY_SIZE,
    MAX_SPEED_MS, MIN_ARRAY_SIZE, MIN_SPEED_MS,
};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Delay between two logical steps
    pub speed: Duration,
    /// Size of generated arrays
    pub array_size: usize,
    /// Capacity of the circular queue at startup
    pub circular_capacity: usize,
    /// Seed for array generation; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Config {
    /// Build a config, clamping every value into its supported range
    pub fn new(
        speed_ms: u64,
        array_size: usize,
        circular_capacity: usize,
        seed: Option<u64>,
    ) -> Self {
        Config {
            speed: clamp_speed(speed_ms),
            array_size: array_size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE),
            circular_capacity,
            seed,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(
            DEFAULT_SPEED_MS,
            DEFAULT_ARRAY_SIZE,
            DEFAULT_CIRCULAR_CAPACITY,
            None,
        )
    }
}

/// Clamp a step delay into the supported range
pub fn clamp_speed(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS))
}
