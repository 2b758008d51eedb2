use crate::core::types::Duration;
use crate::core::IntegrationScheme;

/// State that can be advanced by explicit first-order schemes.
pub trait Integrable {
    type Acceleration: Copy;

    /// Net acceleration of the current (pre-step) state.
    fn acceleration(&self) -> Self::Acceleration;

    /// Moves the position with the current velocity.
    fn integrate_position(&mut self, dt: Duration);

    /// Moves the velocity with an acceleration evaluated before the step.
    fn integrate_velocity(&mut self, acceleration: Self::Acceleration, dt: Duration);

    /// Bookkeeping after both updates: elapsed time, derived fields.
    fn finish_step(&mut self, _dt: Duration) {}
}

/// Fixed-step integrator for a single scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integrator {
    pub scheme: IntegrationScheme,
}

impl Integrator {
    pub const fn new(scheme: IntegrationScheme) -> Self {
        Self { scheme }
    }

    /// Performs exactly one discrete update of `body`.
    pub fn step<B: Integrable>(&self, body: &mut B, dt: Duration) {
        let acceleration = body.acceleration();
        match self.scheme {
            IntegrationScheme::Euler => {
                body.integrate_position(dt);
                body.integrate_velocity(acceleration, dt);
            }
            IntegrationScheme::EulerCromer => {
                body.integrate_velocity(acceleration, dt);
                body.integrate_position(dt);
            }
        }
        body.finish_step(dt);
    }
}
