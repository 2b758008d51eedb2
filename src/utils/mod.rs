//! Utility helpers: iteration counting, sequence comparison, and scoped timers.

pub mod logging;
pub mod math;

pub use logging::ScopedTimer;
pub use math::*;
