//! Physical parameters for the projectile and oscillator experiments.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::config::{AIR_DENSITY, STANDARD_GRAVITY};
use crate::core::types::{
    AccelerationScalar, Angle, AngularVelocity, Area, DampingCoefficient, Density, DragFactor,
    ForceScalar, Frequency, Length, Mass, Speed, Stiffness,
};
use crate::core::units::{
    centimeter, degree, gram, hertz, kilogram, kilogram_per_cubic_meter, meter, meter_per_second,
    meter_per_second_squared, millimeter, newton, radian_per_second,
};
use crate::core::MagnusSpinSense;

/// Body and launch description for a projectile experiment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileParams {
    pub radius: Length,
    pub mass: Mass,
    /// Dimensionless drag coefficient C_d.
    pub drag_coefficient: f64,
    pub air_density: Density,
    /// Magnitude of the downward gravitational acceleration.
    pub gravity: AccelerationScalar,
    pub launch_speed: Speed,
    pub launch_angle: Angle,
    pub spin_rate: AngularVelocity,
    pub spin_sense: MagnusSpinSense,
}

impl Default for ProjectileParams {
    fn default() -> Self {
        Self::golf_ball()
    }
}

impl ProjectileParams {
    pub fn builder() -> ProjectileParamsBuilder {
        ProjectileParamsBuilder::default()
    }

    /// Golf ball with top spin of one revolution per second.
    pub fn golf_ball() -> Self {
        Self {
            radius: Length::new::<millimeter>(45.0),
            mass: Mass::new::<gram>(45.0),
            drag_coefficient: 0.2,
            air_density: Density::new::<kilogram_per_cubic_meter>(AIR_DENSITY),
            gravity: AccelerationScalar::new::<meter_per_second_squared>(STANDARD_GRAVITY),
            launch_speed: Speed::new::<meter_per_second>(40.0),
            launch_angle: Angle::new::<degree>(35.0),
            spin_rate: AngularVelocity::new::<radian_per_second>(2.0 * PI),
            spin_sense: MagnusSpinSense::CounterClockwise,
        }
    }

    /// Table-tennis ball launched without spin.
    pub fn table_tennis_ball() -> Self {
        Self {
            radius: Length::new::<centimeter>(4.0),
            mass: Mass::new::<gram>(2.7),
            drag_coefficient: 0.3,
            spin_rate: AngularVelocity::new::<radian_per_second>(0.0),
            spin_sense: MagnusSpinSense::Clockwise,
            ..Self::golf_ball()
        }
    }

    pub fn cross_sectional_area(&self) -> Area {
        self.radius * self.radius * PI
    }

    /// Quadratic drag factor ½·ρ·C_d·A, so that |F_D| = factor·|v|².
    pub fn drag_factor(&self) -> DragFactor {
        self.air_density * self.cross_sectional_area() * (0.5 * self.drag_coefficient)
    }

    /// Magnus coefficient 2π·ρ·ω·r³, so that |F_M| = coefficient·|v|.
    pub fn magnus_coefficient(&self) -> DampingCoefficient {
        let volume = self.radius * self.radius * self.radius;
        // rad/s read as 1/s; uom keeps angles out of products.
        let spin = Frequency::new::<hertz>(self.spin_rate.get::<radian_per_second>());
        self.air_density * volume * spin * (2.0 * PI)
    }
}

/// Builder for [`ProjectileParams`], starting from the golf-ball preset.
#[derive(Debug, Clone, Default)]
pub struct ProjectileParamsBuilder {
    params: ProjectileParams,
}

impl ProjectileParamsBuilder {
    pub fn radius(mut self, radius: Length) -> Self {
        self.params.radius = radius;
        self
    }

    pub fn mass(mut self, mass: Mass) -> Self {
        self.params.mass = mass;
        self
    }

    pub fn drag_coefficient(mut self, drag_coefficient: f64) -> Self {
        self.params.drag_coefficient = drag_coefficient;
        self
    }

    pub fn air_density(mut self, air_density: Density) -> Self {
        self.params.air_density = air_density;
        self
    }

    pub fn gravity(mut self, gravity: AccelerationScalar) -> Self {
        self.params.gravity = gravity;
        self
    }

    pub fn launch_speed(mut self, launch_speed: Speed) -> Self {
        self.params.launch_speed = launch_speed;
        self
    }

    pub fn launch_angle(mut self, launch_angle: Angle) -> Self {
        self.params.launch_angle = launch_angle;
        self
    }

    pub fn spin(mut self, spin_rate: AngularVelocity, spin_sense: MagnusSpinSense) -> Self {
        self.params.spin_rate = spin_rate;
        self.params.spin_sense = spin_sense;
        self
    }

    pub fn build(self) -> ProjectileParams {
        self.params
    }
}

/// Mass on a linear spring with viscous damping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorParams {
    pub mass: Mass,
    pub spring_constant: Stiffness,
    /// Ratio of the damping coefficient to critical damping.
    pub damping_ratio: f64,
    pub start_position: Length,
    pub start_velocity: Speed,
}

impl Default for OscillatorParams {
    fn default() -> Self {
        Self {
            mass: Mass::new::<kilogram>(0.3),
            spring_constant: ForceScalar::new::<newton>(15.0) / Length::new::<meter>(1.0),
            damping_ratio: 2.0,
            start_position: Length::new::<meter>(1.0),
            start_velocity: Speed::new::<meter_per_second>(0.0),
        }
    }
}

impl OscillatorParams {
    pub fn with_damping_ratio(self, damping_ratio: f64) -> Self {
        Self {
            damping_ratio,
            ..self
        }
    }

    /// 2·√(k·m).
    pub fn critical_damping(&self) -> DampingCoefficient {
        (self.spring_constant * self.mass).sqrt() * 2.0
    }

    pub fn damping_coefficient(&self) -> DampingCoefficient {
        self.critical_damping() * self.damping_ratio
    }
}
