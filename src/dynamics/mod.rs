//! Simulation dynamics: force laws, the fixed-step integrator, and the two bodies.

pub mod forces;
pub mod integrator;
pub mod oscillator;
pub mod params;
pub mod projectile;

pub use forces::{DragForce, ForceGenerator, ForceRegistry, GravityForce, MagnusForce, SpringDamper};
pub use integrator::{Integrable, Integrator};
pub use oscillator::OscillatorSimulation;
pub use params::{OscillatorParams, ProjectileParams, ProjectileParamsBuilder};
pub use projectile::{ProjectileSimulation, ProjectileState};
