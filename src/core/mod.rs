//! Dimension-checked quantities, vectors, and the shared run-mode types.

pub mod types;
pub mod units;
pub mod vector;

pub use types::{ForceModel, IntegrationScheme, MagnusSpinSense, RunMode};
pub use units::SiScalar;
pub use vector::{UnitVector2, Vector2};
