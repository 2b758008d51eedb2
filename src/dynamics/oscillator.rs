//! One-dimensional damped harmonic oscillator.

use crate::core::types::{AccelerationScalar, Duration, Length, Speed};
use crate::core::{IntegrationScheme, SiScalar};

use super::forces::SpringDamper;
use super::integrator::{Integrable, Integrator};
use super::params::OscillatorParams;

/// Mass on a spring-damper, released from `start_position`.
///
/// The acceleration is derived from position and velocity; it is recomputed
/// after every step and never integrated on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorSimulation {
    position: Length,
    velocity: Speed,
    acceleration: AccelerationScalar,
    time: Duration,
    spring: SpringDamper,
    integrator: Integrator,
}

impl OscillatorSimulation {
    pub fn new(params: &OscillatorParams, scheme: IntegrationScheme) -> Self {
        let spring = SpringDamper {
            spring_constant: params.spring_constant,
            damping: params.damping_coefficient(),
            mass: params.mass,
        };
        Self {
            position: params.start_position,
            velocity: params.start_velocity,
            acceleration: spring.acceleration(params.start_position, params.start_velocity),
            time: Duration::from_si(0.0),
            spring,
            integrator: Integrator::new(scheme),
        }
    }

    pub fn position(&self) -> Length {
        self.position
    }

    pub fn velocity(&self) -> Speed {
        self.velocity
    }

    pub fn acceleration(&self) -> AccelerationScalar {
        self.acceleration
    }

    /// Simulated time elapsed since construction.
    pub fn time(&self) -> Duration {
        self.time
    }

    pub fn scheme(&self) -> IntegrationScheme {
        self.integrator.scheme
    }

    pub fn step(&mut self, dt: Duration) {
        let integrator = self.integrator;
        integrator.step(self, dt);
    }
}

impl Integrable for OscillatorSimulation {
    type Acceleration = AccelerationScalar;

    fn acceleration(&self) -> AccelerationScalar {
        self.acceleration
    }

    fn integrate_position(&mut self, dt: Duration) {
        self.position += self.velocity * dt;
    }

    fn integrate_velocity(&mut self, acceleration: AccelerationScalar, dt: Duration) {
        self.velocity += acceleration * dt;
    }

    fn finish_step(&mut self, dt: Duration) {
        self.acceleration = self.spring.acceleration(self.position, self.velocity);
        self.time += dt;
    }
}
