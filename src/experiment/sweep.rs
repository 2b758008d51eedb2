//! Experiment sweeps over run modes and candidate time steps.

use log::{debug, info, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_OSCILLATOR_DURATION, DEFAULT_PROJECTILE_DURATION, DEFAULT_TIME_STEPS_MS,
};
use crate::core::types::Duration;
use crate::core::units::{millisecond, second};
use crate::core::{ForceModel, IntegrationScheme, RunMode, SiScalar};
use crate::dynamics::{OscillatorParams, ProjectileParams};
use crate::error::{ConfigError, Result};
use crate::utils::{calculate_iterations, divides_evenly, ScopedTimer};

use super::series::{sample_oscillation, sample_trajectory, OscillatorSeries, TrajectorySeries};

/// Candidate time steps and the simulated duration shared by every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub time_steps: Vec<Duration>,
    pub duration: Duration,
}

impl SweepConfig {
    pub fn new(time_steps: Vec<Duration>, duration: Duration) -> Self {
        Self {
            time_steps,
            duration,
        }
    }

    /// The default candidate steps over `duration`.
    pub fn with_default_steps(duration: Duration) -> Self {
        let time_steps = DEFAULT_TIME_STEPS_MS
            .iter()
            .map(|&ms| Duration::new::<millisecond>(ms))
            .collect();
        Self::new(time_steps, duration)
    }

    /// Rejects non-positive or non-finite values, empty step lists, and steps
    /// so small that a run would exceed
    /// [`MAX_ITERATIONS`](crate::config::MAX_ITERATIONS) steps.
    ///
    /// A step that does not divide the duration is accepted; its run length
    /// is rounded to the nearest whole number of steps.
    pub fn validate(&self) -> Result<()> {
        if self.time_steps.is_empty() {
            return Err(ConfigError::EmptySweep);
        }
        let duration = self.duration.si();
        if !duration.is_finite() || duration <= 0.0 {
            return Err(ConfigError::InvalidDuration(duration));
        }
        for &dt in &self.time_steps {
            let step = dt.si();
            if !step.is_finite() || step <= 0.0 {
                return Err(ConfigError::InvalidTimeStep(step));
            }
            let Some(steps) = calculate_iterations(dt, self.duration) else {
                return Err(ConfigError::InvalidTimeStep(step));
            };
            if !divides_evenly(dt, self.duration) {
                warn!(
                    "time step {} ms does not divide {} s; running {steps} steps",
                    dt.get::<millisecond>(),
                    self.duration.get::<second>()
                );
            }
        }
        Ok(())
    }

    /// Every (time step, item) cell, time step outermost.
    fn cells<T: Copy>(&self, items: &[T]) -> Vec<(Duration, T)> {
        self.time_steps
            .iter()
            .flat_map(|&dt| items.iter().map(move |&item| (dt, item)))
            .collect()
    }
}

/// Projectile sweep: every run mode at every time step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileExperiment {
    pub name: String,
    pub params: ProjectileParams,
    pub modes: Vec<RunMode>,
    pub sweep: SweepConfig,
}

impl ProjectileExperiment {
    pub fn new(
        name: impl Into<String>,
        params: ProjectileParams,
        modes: Vec<RunMode>,
        sweep: SweepConfig,
    ) -> Result<Self> {
        if modes.is_empty() {
            return Err(ConfigError::EmptySweep);
        }
        sweep.validate()?;
        Ok(Self {
            name: name.into(),
            params,
            modes,
            sweep,
        })
    }

    /// Gravity, drag and Magnus lift, each under both schemes.
    pub fn golf_ball() -> Self {
        Self {
            name: "golf_ball".into(),
            params: ProjectileParams::golf_ball(),
            modes: modes_for(&[
                ForceModel::GRAVITY_ONLY,
                ForceModel::DRAG,
                ForceModel::DRAG_AND_MAGNUS,
            ]),
            sweep: SweepConfig::with_default_steps(Duration::new::<second>(
                DEFAULT_PROJECTILE_DURATION,
            )),
        }
    }

    /// Gravity with and without drag, each under both schemes.
    pub fn table_tennis() -> Self {
        Self {
            name: "table_tennis_ball".into(),
            params: ProjectileParams::table_tennis_ball(),
            modes: modes_for(&[ForceModel::GRAVITY_ONLY, ForceModel::DRAG]),
            sweep: SweepConfig::with_default_steps(Duration::new::<second>(
                DEFAULT_PROJECTILE_DURATION,
            )),
        }
    }

    pub fn run_count(&self) -> usize {
        self.modes.len() * self.sweep.time_steps.len()
    }

    fn run_cell(&self, time_step: Duration, mode: RunMode) -> Result<TrajectorySeries> {
        let _timer = ScopedTimer::new("projectile::run");
        let run = sample_trajectory(&self.params, mode, time_step, self.sweep.duration)?;
        debug!(
            "{}: {} at dt = {} ms, {} steps",
            self.name,
            mode.label(),
            time_step.get::<millisecond>(),
            run.len()
        );
        Ok(run)
    }

    /// Runs every cell in order: time steps outermost, modes innermost.
    ///
    /// Stops at the first cell whose step count cannot be formed.
    pub fn run(&self) -> Result<Vec<TrajectorySeries>> {
        let _timer = ScopedTimer::new("projectile::sweep");
        info!("{}: running {} trajectories", self.name, self.run_count());
        self.sweep
            .cells(&self.modes)
            .into_iter()
            .map(|(dt, mode)| self.run_cell(dt, mode))
            .collect()
    }

    /// Same output as [`Self::run`], with cells spread over the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(&self) -> Result<Vec<TrajectorySeries>> {
        let _timer = ScopedTimer::new("projectile::sweep_parallel");
        info!(
            "{}: running {} trajectories in parallel",
            self.name,
            self.run_count()
        );
        self.sweep
            .cells(&self.modes)
            .into_par_iter()
            .map(|(dt, mode)| self.run_cell(dt, mode))
            .collect()
    }
}

/// Oscillator sweep: every scheme at every time step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscillatorExperiment {
    pub name: String,
    pub params: OscillatorParams,
    pub schemes: Vec<IntegrationScheme>,
    pub sweep: SweepConfig,
}

impl OscillatorExperiment {
    pub fn new(
        name: impl Into<String>,
        params: OscillatorParams,
        schemes: Vec<IntegrationScheme>,
        sweep: SweepConfig,
    ) -> Result<Self> {
        if schemes.is_empty() {
            return Err(ConfigError::EmptySweep);
        }
        sweep.validate()?;
        Ok(Self {
            name: name.into(),
            params,
            schemes,
            sweep,
        })
    }

    /// Over-damped spring released from 1 m.
    pub fn damped_spring() -> Self {
        Self {
            name: "oscillation".into(),
            params: OscillatorParams::default(),
            schemes: IntegrationScheme::ALL.to_vec(),
            sweep: SweepConfig::with_default_steps(Duration::new::<second>(
                DEFAULT_OSCILLATOR_DURATION,
            )),
        }
    }

    pub fn run_count(&self) -> usize {
        self.schemes.len() * self.sweep.time_steps.len()
    }

    /// Export file stem, e.g. `oscillation_damping_ratio_2` or `..._0_5`.
    pub fn file_stem(&self) -> String {
        format!("{}_damping_ratio_{}", self.name, self.params.damping_ratio).replace('.', "_")
    }

    fn run_cell(&self, time_step: Duration, scheme: IntegrationScheme) -> Result<OscillatorSeries> {
        let _timer = ScopedTimer::new("oscillator::run");
        let run = sample_oscillation(&self.params, scheme, time_step, self.sweep.duration)?;
        debug!(
            "{}: {scheme:?} at dt = {} ms, {} steps",
            self.name,
            time_step.get::<millisecond>(),
            run.len()
        );
        Ok(run)
    }

    pub fn run(&self) -> Result<Vec<OscillatorSeries>> {
        let _timer = ScopedTimer::new("oscillator::sweep");
        info!("{}: running {} oscillations", self.name, self.run_count());
        self.sweep
            .cells(&self.schemes)
            .into_iter()
            .map(|(dt, scheme)| self.run_cell(dt, scheme))
            .collect()
    }

    #[cfg(feature = "parallel")]
    pub fn run_parallel(&self) -> Result<Vec<OscillatorSeries>> {
        let _timer = ScopedTimer::new("oscillator::sweep_parallel");
        info!(
            "{}: running {} oscillations in parallel",
            self.name,
            self.run_count()
        );
        self.sweep
            .cells(&self.schemes)
            .into_par_iter()
            .map(|(dt, scheme)| self.run_cell(dt, scheme))
            .collect()
    }
}

/// Every force model under both schemes, Euler first.
pub fn modes_for(forces: &[ForceModel]) -> Vec<RunMode> {
    forces
        .iter()
        .flat_map(|&f| IntegrationScheme::ALL.map(|scheme| RunMode::new(f, scheme)))
        .collect()
}
