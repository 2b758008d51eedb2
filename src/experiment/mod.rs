//! Experiment harness: per-run sampling and sweeps over modes and time steps.

pub mod series;
pub mod sweep;

pub use series::{
    sample_oscillation, sample_trajectory, OscillatorSeries, SamplePoint, TrajectorySeries,
};
pub use sweep::{modes_for, OscillatorExperiment, ProjectileExperiment, SweepConfig};
