//! Global configuration constants shared by every experiment.

/// Standard gravity (SI 2019), magnitude of the downward acceleration in m/s².
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// Sea-level air density at 15 °C, in kg/m³.
pub const AIR_DENSITY: f64 = 1.225;

/// Candidate integration time steps, in milliseconds.
pub const DEFAULT_TIME_STEPS_MS: [f64; 4] = [0.1, 1.0, 5.0, 10.0];

/// Upper bound on the number of steps in a single run.
pub const MAX_ITERATIONS: usize = 100_000_000;

/// Simulated duration of the projectile experiments, in seconds.
pub const DEFAULT_PROJECTILE_DURATION: f64 = 2.0;

/// Simulated duration of the oscillator experiment, in seconds.
pub const DEFAULT_OSCILLATOR_DURATION: f64 = 1.5;

/// Line width requested for every emitted series.
pub const DEFAULT_LINE_WIDTH: f32 = 1.0;
