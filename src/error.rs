//! Error types for experiment configuration and the in-memory chart sink.

use std::fmt;

/// Rejected experiment configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A candidate time step is not a positive finite number, or needs more
    /// than [`MAX_ITERATIONS`](crate::config::MAX_ITERATIONS) steps (seconds).
    InvalidTimeStep(f64),
    /// The simulated duration is zero, negative, or not finite (seconds).
    InvalidDuration(f64),
    /// No time steps or no run modes were given.
    EmptySweep,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidTimeStep(dt) => write!(f, "Invalid time step: {dt} s"),
            Self::InvalidDuration(t) => write!(f, "Invalid duration: {t} s"),
            Self::EmptySweep => write!(f, "Sweep has no time steps or no run modes"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure reported by [`MemoryChart`](crate::chart::MemoryChart).
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// The x and y sequences of one series differ in length.
    LengthMismatch { x: usize, y: usize },
    /// More legend labels than emitted series.
    LegendOverflow { labels: usize, series: usize },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::LengthMismatch { x, y } => {
                write!(f, "Series length mismatch: {x} x values, {y} y values")
            }
            Self::LegendOverflow { labels, series } => {
                write!(f, "Legend has {labels} labels for {series} series")
            }
        }
    }
}

impl std::error::Error for ChartError {}

/// Convenience alias for configuration results.
pub type Result<T> = std::result::Result<T, ConfigError>;
