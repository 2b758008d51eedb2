//! Kinematics Lab – fixed-step integration experiments for Rust.
//!
//! This crate integrates a small projectile (golf ball, table-tennis ball)
//! under gravity, quadratic drag and Magnus lift, and a damped harmonic
//! oscillator, using explicit Euler and Euler-Cromer steps. Quantities are
//! `uom` SI types, so their physical dimension is checked at compile time.
//! The experiment harness runs every run mode at several time steps and hands
//! the sampled series to a chart sink.

pub mod chart;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod experiment;
pub mod utils;

pub use glam::DVec2;
pub use uom;

pub use chart::{ChartSink, ExportFormat, MemoryChart, SeriesHandle, SeriesStyle};
pub use crate::core::{
    types::{
        Acceleration, AccelerationScalar, Angle, AngularVelocity, Duration, Force, Length, Mass,
        Position, Speed, Velocity,
    },
    ForceModel, IntegrationScheme, MagnusSpinSense, RunMode, SiScalar, Vector2,
};
pub use dynamics::{
    forces::{DragForce, ForceGenerator, ForceRegistry, GravityForce, MagnusForce, SpringDamper},
    integrator::{Integrable, Integrator},
    OscillatorParams, OscillatorSimulation, ProjectileParams, ProjectileSimulation,
};
pub use error::{ChartError, ConfigError};
pub use experiment::{
    OscillatorExperiment, OscillatorSeries, ProjectileExperiment, SweepConfig, TrajectorySeries,
};
