//! Sampled output series and the collectors that fill them.

use serde::{Deserialize, Serialize};

use crate::core::types::Duration;
use crate::core::units::millisecond;
use crate::core::{IntegrationScheme, RunMode, SiScalar};
use crate::dynamics::{OscillatorParams, OscillatorSimulation, ProjectileParams, ProjectileSimulation};
use crate::error::{ConfigError, Result};
use crate::utils::calculate_iterations;

/// Projectile positions recorded before every step of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySeries {
    pub label: String,
    pub mode: RunMode,
    pub time_step: Duration,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// A point of a sampled trajectory, in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

impl TrajectorySeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Label including the time step, as shown in a chart legend.
    pub fn legend_label(&self) -> String {
        legend_label(&self.label, self.time_step)
    }

    /// Highest recorded sample.
    pub fn apex(&self) -> Option<SamplePoint> {
        self.x
            .iter()
            .zip(&self.y)
            .map(|(&x, &y)| SamplePoint { x, y })
            .max_by(|a, b| a.y.total_cmp(&b.y))
    }

    /// First downward crossing of y = 0 after launch, linearly interpolated.
    pub fn ground_crossing(&self) -> Option<SamplePoint> {
        (1..self.len()).find_map(|i| {
            let (y0, y1) = (self.y[i - 1], self.y[i]);
            if y0 > 0.0 && y1 <= 0.0 {
                let t = y0 / (y0 - y1);
                let x = self.x[i - 1] + t * (self.x[i] - self.x[i - 1]);
                Some(SamplePoint { x, y: 0.0 })
            } else {
                None
            }
        })
    }
}

/// Oscillator observables recorded before every step of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscillatorSeries {
    pub scheme: IntegrationScheme,
    pub time_step: Duration,
    pub time: Vec<f64>,
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub acceleration: Vec<f64>,
}

impl OscillatorSeries {
    pub const POSITION_LABEL: &'static str = "position [m]";
    pub const VELOCITY_LABEL: &'static str = "velocity [m/s]";
    pub const ACCELERATION_LABEL: &'static str = "acceleration [m/s^2]";

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Legend labels for the position, velocity and acceleration curves.
    pub fn legend_labels(&self) -> [String; 3] {
        [
            Self::POSITION_LABEL,
            Self::VELOCITY_LABEL,
            Self::ACCELERATION_LABEL,
        ]
        .map(|quantity| {
            let (name, unit) = quantity.split_once(' ').unwrap_or((quantity, ""));
            let label = format!("{name}{} {unit}", self.scheme.label_suffix());
            legend_label(label.trim_end(), self.time_step)
        })
    }
}

fn legend_label(label: &str, time_step: Duration) -> String {
    // Strip unit-conversion noise such as 0.10000000000000002.
    let milliseconds = (time_step.get::<millisecond>() * 1e6).round() / 1e6;
    format!("{label} (dt = {milliseconds} ms)")
}

/// Step count of one run, or the configuration value that makes it unusable.
fn run_length(time_step: Duration, duration: Duration) -> Result<usize> {
    let seconds = duration.si();
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(ConfigError::InvalidDuration(seconds));
    }
    calculate_iterations(time_step, duration).ok_or(ConfigError::InvalidTimeStep(time_step.si()))
}

/// Runs one projectile configuration for `round(duration / dt)` steps.
///
/// Index `i` holds the state before the `i`-th step; the state produced by
/// the final step is not recorded.
pub fn sample_trajectory(
    params: &ProjectileParams,
    mode: RunMode,
    time_step: Duration,
    duration: Duration,
) -> Result<TrajectorySeries> {
    let iterations = run_length(time_step, duration)?;
    let mut simulation = ProjectileSimulation::new(params, mode);
    let mut x = Vec::with_capacity(iterations);
    let mut y = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let position = simulation.position();
        x.push(position.x().si());
        y.push(position.y().si());
        simulation.step(time_step);
    }

    Ok(TrajectorySeries {
        label: mode.label(),
        mode,
        time_step,
        x,
        y,
    })
}

/// Runs one oscillator configuration for `round(duration / dt)` steps.
pub fn sample_oscillation(
    params: &OscillatorParams,
    scheme: IntegrationScheme,
    time_step: Duration,
    duration: Duration,
) -> Result<OscillatorSeries> {
    let iterations = run_length(time_step, duration)?;
    let mut simulation = OscillatorSimulation::new(params, scheme);
    let mut series = OscillatorSeries {
        scheme,
        time_step,
        time: Vec::with_capacity(iterations),
        position: Vec::with_capacity(iterations),
        velocity: Vec::with_capacity(iterations),
        acceleration: Vec::with_capacity(iterations),
    };

    for _ in 0..iterations {
        series.time.push(simulation.time().si());
        series.position.push(simulation.position().si());
        series.velocity.push(simulation.velocity().si());
        series.acceleration.push(simulation.acceleration().si());
        simulation.step(time_step);
    }

    Ok(series)
}
