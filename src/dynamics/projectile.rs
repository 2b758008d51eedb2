//! Point-mass projectile in the vertical plane.

use crate::core::types::{Acceleration, Duration, Mass, Position, Velocity};
use crate::core::{RunMode, Vector2};

use super::forces::{DragForce, ForceRegistry, GravityForce, MagnusForce};
use super::integrator::{Integrable, Integrator};
use super::params::ProjectileParams;

/// Position and velocity of a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProjectileState {
    pub position: Position,
    pub velocity: Velocity,
}

/// One projectile run: launched from the origin, advanced under the forces
/// its [`RunMode`] enables.
pub struct ProjectileSimulation {
    state: ProjectileState,
    mass: Mass,
    forces: ForceRegistry,
    integrator: Integrator,
}

impl ProjectileSimulation {
    /// Launches at `params.launch_speed` along `params.launch_angle`.
    pub fn new(params: &ProjectileParams, mode: RunMode) -> Self {
        let velocity = Vector2::from_polar(params.launch_speed, params.launch_angle);
        Self::with_state(
            params,
            mode,
            ProjectileState {
                position: Position::ZERO,
                velocity,
            },
        )
    }

    pub fn with_state(params: &ProjectileParams, mode: RunMode, state: ProjectileState) -> Self {
        let mut forces = ForceRegistry::new();
        forces.add_force(GravityForce::new(params.gravity, params.mass));
        if mode.forces.drag {
            forces.add_force(DragForce {
                factor: params.drag_factor(),
            });
        }
        if mode.forces.magnus {
            forces.add_force(MagnusForce {
                coefficient: params.magnus_coefficient(),
                sense: params.spin_sense,
            });
        }

        Self {
            state,
            mass: params.mass,
            forces,
            integrator: Integrator::new(mode.scheme),
        }
    }

    pub fn position(&self) -> Position {
        self.state.position
    }

    pub fn velocity(&self) -> Velocity {
        self.state.velocity
    }

    pub fn step(&mut self, dt: Duration) {
        let integrator = self.integrator;
        integrator.step(self, dt);
    }
}

impl Integrable for ProjectileSimulation {
    type Acceleration = Acceleration;

    fn acceleration(&self) -> Acceleration {
        self.forces.net_force(self.state.velocity) / self.mass
    }

    fn integrate_position(&mut self, dt: Duration) {
        self.state.position += self.state.velocity * dt;
    }

    fn integrate_velocity(&mut self, acceleration: Acceleration, dt: Duration) {
        self.state.velocity += acceleration * dt;
    }
}
