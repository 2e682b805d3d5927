//! Error types for model construction and runner configuration.

use crate::coverage::Position;
use thiserror::Error;

/// Rejected terrain or sensor-state construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageError {
    #[error("terrain must have at least one row and one column")]
    EmptyTerrain,

    #[error("terrain row {row} has {found} cells, expected {expected}")]
    RaggedTerrain {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("terrain cell ({row}, {col}) is {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: String },

    #[error("{positions} sensor positions but {capacities} coverage capacities")]
    SensorCountMismatch { positions: usize, capacities: usize },

    #[error("sensor {sensor} at {position} lies outside the {rows}x{cols} terrain")]
    OutOfBounds {
        sensor: usize,
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("sensor index {sensor} out of range for {count} sensors")]
    UnknownSensor { sensor: usize, count: usize },
}

/// Rejected runner configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    #[error("num_sites must be at least 1")]
    ZeroSites,

    #[error("num_sites ({sites}) exceeds population_size ({population})")]
    SitesExceedPopulation { sites: usize, population: usize },

    #[error("elite_site_count ({elite}) exceeds num_sites ({sites})")]
    EliteExceedSites { elite: usize, sites: usize },

    #[error("elite_bee_count and other_bee_count must both be at least 1")]
    ZeroBees,

    #[error("patch_size must be at least 1")]
    ZeroPatchSize,

    #[error("patch_size must be in [1, {sensors}], got {patch_size}")]
    PatchSize { patch_size: usize, sensors: usize },

    #[error("patch_size_decay_probability must be in [0, 1], got {0}")]
    DecayProbability(f64),

    #[error("schedule scale k must be positive, got {0}")]
    ScheduleScale(f64),

    #[error("schedule decay rate must be non-negative, got {0}")]
    ScheduleDecay(f64),
}
