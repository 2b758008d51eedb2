use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};
use uom::si::f64 as si;

use super::vector::Vector2;

pub type Length = si::Length;
pub type Duration = si::Time;
pub type Mass = si::Mass;
pub type Speed = si::Velocity;
pub type AccelerationScalar = si::Acceleration;
pub type ForceScalar = si::Force;
pub type Angle = si::Angle;
pub type AngularVelocity = si::AngularVelocity;
pub type Density = si::MassDensity;
pub type Area = si::Area;
pub type Frequency = si::Frequency;
/// N/m.
pub type Stiffness = <si::Force as Div<si::Length>>::Output;
/// N·s/m, the viscous damping coefficient.
pub type DampingCoefficient = <si::Force as Div<si::Velocity>>::Output;
/// kg/m, the quadratic drag factor ½·ρ·C_d·A.
pub type DragFactor = <si::MassDensity as Mul<si::Area>>::Output;

pub type Position = Vector2<si::Length>;
pub type Velocity = Vector2<si::Velocity>;
pub type Acceleration = Vector2<si::Acceleration>;
pub type Force = Vector2<si::Force>;

/// Time-stepping scheme, fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IntegrationScheme {
    /// Position advances with the pre-step velocity.
    #[default]
    Euler,
    /// Velocity advances first; position uses the updated velocity.
    EulerCromer,
}

impl IntegrationScheme {
    pub const ALL: [IntegrationScheme; 2] = [IntegrationScheme::Euler, IntegrationScheme::EulerCromer];

    /// Suffix appended to series labels.
    pub fn label_suffix(self) -> &'static str {
        match self {
            IntegrationScheme::Euler => "",
            IntegrationScheme::EulerCromer => ", semi-implicit",
        }
    }
}

/// Aerodynamic force toggles; gravity always acts on projectiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ForceModel {
    pub drag: bool,
    pub magnus: bool,
}

impl ForceModel {
    pub const GRAVITY_ONLY: Self = Self {
        drag: false,
        magnus: false,
    };
    pub const DRAG: Self = Self {
        drag: true,
        magnus: false,
    };
    pub const DRAG_AND_MAGNUS: Self = Self {
        drag: true,
        magnus: true,
    };

    pub fn label(self) -> &'static str {
        match (self.drag, self.magnus) {
            (false, false) => "gravity only",
            (true, false) => "gravity+drag",
            (false, true) => "gravity+magnus",
            (true, true) => "gravity+drag+magnus",
        }
    }
}

/// Immutable per-run flags: which forces act and how the state is advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct RunMode {
    pub forces: ForceModel,
    pub scheme: IntegrationScheme,
}

impl RunMode {
    pub const fn new(forces: ForceModel, scheme: IntegrationScheme) -> Self {
        Self { forces, scheme }
    }

    pub fn label(self) -> String {
        format!("{}{}", self.forces.label(), self.scheme.label_suffix())
    }
}

/// Side of the velocity vector that the Magnus force pushes towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MagnusSpinSense {
    /// Deflects to the left of the direction of travel.
    #[default]
    CounterClockwise,
    /// Deflects to the right of the direction of travel.
    Clockwise,
}

impl MagnusSpinSense {
    pub fn sign(self) -> f64 {
        match self {
            MagnusSpinSense::CounterClockwise => 1.0,
            MagnusSpinSense::Clockwise => -1.0,
        }
    }
}
