//! Two-dimensional vectors of same-dimension quantities, backed by `glam`.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};
use uom::si::angle::radian;
use uom::si::f64::{Angle, Ratio};

use super::units::SiScalar;

/// An (x, y) pair of quantities sharing the scalar type `Q`.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Vector2<Q> {
    raw: DVec2,
    #[serde(skip)]
    quantity: PhantomData<fn() -> Q>,
}

/// Direction vector; the magnitude dimension has been discarded.
pub type UnitVector2 = Vector2<Ratio>;

impl<Q: SiScalar> Vector2<Q> {
    pub const ZERO: Self = Self::from_raw(DVec2::ZERO);

    pub fn new(x: Q, y: Q) -> Self {
        Self::from_raw(DVec2::new(x.si(), y.si()))
    }

    /// Wraps raw SI components.
    pub const fn from_raw(raw: DVec2) -> Self {
        Self {
            raw,
            quantity: PhantomData,
        }
    }

    /// Builds the vector `magnitude · (cos θ, sin θ)`.
    pub fn from_polar(magnitude: Q, angle: Angle) -> Self {
        Self::from_raw(DVec2::from_angle(angle.get::<radian>()) * magnitude.si())
    }

    pub const fn raw(self) -> DVec2 {
        self.raw
    }

    pub fn x(self) -> Q {
        Q::from_si(self.raw.x)
    }

    pub fn y(self) -> Q {
        Q::from_si(self.raw.y)
    }

    pub fn magnitude(self) -> Q {
        Q::from_si(self.raw.length())
    }

    pub fn magnitude_squared(self) -> <Q as Mul<Q>>::Output
    where
        Q: Mul<Q>,
        <Q as Mul<Q>>::Output: SiScalar,
    {
        SiScalar::from_si(self.raw.length_squared())
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn try_normalized(self) -> Option<UnitVector2> {
        self.raw.try_normalize().map(Vector2::from_raw)
    }

    /// Rotates counter-clockwise by `angle`.
    pub fn rotated(self, angle: Angle) -> Self {
        Self::from_raw(DVec2::from_angle(angle.get::<radian>()).rotate(self.raw))
    }

    /// Rotates by a quarter turn counter-clockwise.
    pub fn perpendicular(self) -> Self {
        Self::from_raw(self.raw.perp())
    }
}

impl<Q> Clone for Vector2<Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q> Copy for Vector2<Q> {}

impl<Q: SiScalar> Default for Vector2<Q> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<Q> PartialEq for Vector2<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<Q> fmt::Debug for Vector2<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({}, {})", self.raw.x, self.raw.y)
    }
}

impl<Q: SiScalar> Neg for Vector2<Q> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_raw(-self.raw)
    }
}

impl<Q: SiScalar> Add for Vector2<Q> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw + rhs.raw)
    }
}

impl<Q: SiScalar> AddAssign for Vector2<Q> {
    fn add_assign(&mut self, rhs: Self) {
        self.raw += rhs.raw;
    }
}

impl<Q: SiScalar> Sub for Vector2<Q> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw - rhs.raw)
    }
}

impl<Q: SiScalar> Mul<f64> for Vector2<Q> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_raw(self.raw * rhs)
    }
}

impl<Q, R> Mul<R> for Vector2<Q>
where
    Q: SiScalar + Mul<R>,
    R: SiScalar,
    <Q as Mul<R>>::Output: SiScalar,
{
    type Output = Vector2<<Q as Mul<R>>::Output>;

    fn mul(self, rhs: R) -> Self::Output {
        Vector2::from_raw(self.raw * rhs.si())
    }
}

impl<Q, R> Div<R> for Vector2<Q>
where
    Q: SiScalar + Div<R>,
    R: SiScalar,
    <Q as Div<R>>::Output: SiScalar,
{
    type Output = Vector2<<Q as Div<R>>::Output>;

    fn div(self, rhs: R) -> Self::Output {
        Vector2::from_raw(self.raw / rhs.si())
    }
}
