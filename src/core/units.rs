//! Scalar layer: `uom` SI quantities stored as `f64`.
//!
//! Dimension checking comes from `uom`; this module only adds the base-unit
//! bridge that [`Vector2`](super::vector::Vector2) needs and re-exports the
//! unit markers the crate constructs quantities with.

use std::marker::PhantomData;

use uom::si::{Dimension, Quantity, SI};

pub use uom::si::acceleration::meter_per_second_squared;
pub use uom::si::angle::{degree, radian};
pub use uom::si::angular_velocity::radian_per_second;
pub use uom::si::force::newton;
pub use uom::si::frequency::hertz;
pub use uom::si::length::{centimeter, meter, millimeter};
pub use uom::si::mass::{gram, kilogram};
pub use uom::si::mass_density::kilogram_per_cubic_meter;
pub use uom::si::time::{millisecond, second};
pub use uom::si::velocity::meter_per_second;

/// An SI quantity viewed through its value in coherent base units.
pub trait SiScalar: Copy {
    fn from_si(value: f64) -> Self;

    fn si(self) -> f64;
}

impl<D> SiScalar for Quantity<D, SI<f64>, f64>
where
    D: Dimension + ?Sized,
{
    fn from_si(value: f64) -> Self {
        Quantity {
            dimension: PhantomData,
            units: PhantomData,
            value,
        }
    }

    fn si(self) -> f64 {
        self.value
    }
}
