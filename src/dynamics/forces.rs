use crate::core::types::{
    Acceleration, AccelerationScalar, DampingCoefficient, DragFactor, Force, Length, Mass, Speed,
    Stiffness, Velocity,
};
use crate::core::{MagnusSpinSense, SiScalar};

/// Force law evaluated from the current velocity of a point mass.
pub trait ForceGenerator: Send + Sync {
    fn force(&self, velocity: Velocity) -> Force;
}

/// Constant weight pointing along -y.
pub struct GravityForce {
    pub weight: Force,
}

impl GravityForce {
    pub fn new(gravity: AccelerationScalar, mass: Mass) -> Self {
        let acceleration = Acceleration::new(AccelerationScalar::from_si(0.0), -gravity);
        Self {
            weight: acceleration * mass,
        }
    }
}

impl ForceGenerator for GravityForce {
    fn force(&self, _velocity: Velocity) -> Force {
        self.weight
    }
}

/// Quadratic drag resisting the direction of motion.
pub struct DragForce {
    /// ½·ρ·C_d·A.
    pub factor: DragFactor,
}

impl ForceGenerator for DragForce {
    fn force(&self, velocity: Velocity) -> Force {
        let Some(direction) = velocity.try_normalized() else {
            return Force::ZERO;
        };
        -direction * (self.factor * velocity.magnitude_squared())
    }
}

/// Simplified Magnus lift, linear in speed and perpendicular to the velocity.
pub struct MagnusForce {
    /// 2π·ρ·ω·r³.
    pub coefficient: DampingCoefficient,
    pub sense: MagnusSpinSense,
}

impl ForceGenerator for MagnusForce {
    fn force(&self, velocity: Velocity) -> Force {
        let Some(direction) = velocity.try_normalized() else {
            return Force::ZERO;
        };
        let magnitude = self.coefficient * velocity.magnitude();
        direction.perpendicular() * (magnitude * self.sense.sign())
    }
}

/// Collection of forces summed into one net force every step.
pub struct ForceRegistry {
    forces: Vec<Box<dyn ForceGenerator>>,
}

impl Default for ForceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceRegistry {
    pub fn new() -> Self {
        Self { forces: Vec::new() }
    }

    pub fn add_force<F: ForceGenerator + 'static>(&mut self, force: F) {
        self.forces.push(Box::new(force));
    }

    pub fn len(&self) -> usize {
        self.forces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }

    pub fn net_force(&self, velocity: Velocity) -> Force {
        let mut net = Force::ZERO;
        for force in &self.forces {
            net += force.force(velocity);
        }
        net
    }
}

/// Linear spring with viscous damping acting along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringDamper {
    pub spring_constant: Stiffness,
    pub damping: DampingCoefficient,
    pub mass: Mass,
}

impl SpringDamper {
    /// a = −(k·y + c·v)/m.
    pub fn acceleration(&self, position: Length, velocity: Speed) -> AccelerationScalar {
        let restoring = self.spring_constant * position + self.damping * velocity;
        -(restoring / self.mass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::{kilogram, meter, meter_per_second, meter_per_second_squared, newton};
    use approx::assert_relative_eq;
    use glam::DVec2;

    fn velocity(x: f64, y: f64) -> Velocity {
        Velocity::from_raw(DVec2::new(x, y))
    }

    #[test]
    fn gravity_points_down() {
        let gravity = GravityForce::new(
            AccelerationScalar::new::<meter_per_second_squared>(9.81),
            Mass::new::<kilogram>(2.0),
        );
        let force = gravity.force(velocity(5.0, 5.0));
        assert_eq!(force.raw(), DVec2::new(0.0, -19.62));
    }

    #[test]
    fn drag_opposes_motion() {
        let drag = DragForce {
            factor: DragFactor::from_si(0.5),
        };
        let v = velocity(3.0, 4.0);
        let force = drag.force(v);
        assert_relative_eq!(force.magnitude().get::<newton>(), 0.5 * 25.0, epsilon = 1e-12);
        let cosine = force.raw().normalize().dot(v.raw().normalize());
        assert_relative_eq!(cosine, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn drag_is_zero_at_rest() {
        let drag = DragForce {
            factor: DragFactor::from_si(0.5),
        };
        let force = drag.force(Velocity::ZERO);
        assert_eq!(force, Force::ZERO);
        assert!(!force.raw().is_nan());
    }

    #[test]
    fn magnus_is_perpendicular_and_signed() {
        let v = velocity(10.0, 2.0);
        let left = MagnusForce {
            coefficient: DampingCoefficient::from_si(0.01),
            sense: MagnusSpinSense::CounterClockwise,
        }
        .force(v);
        let right = MagnusForce {
            coefficient: DampingCoefficient::from_si(0.01),
            sense: MagnusSpinSense::Clockwise,
        }
        .force(v);

        assert_relative_eq!(left.raw().dot(v.raw()), 0.0, epsilon = 1e-12);
        assert_relative_eq!(left.magnitude().get::<newton>(), 0.01 * v.magnitude().si(), epsilon = 1e-12);
        assert!(v.raw().perp_dot(left.raw()) > 0.0, "counter-clockwise spin pushes left");
        assert_eq!(left, -right);
    }

    #[test]
    fn magnus_is_zero_at_rest() {
        let magnus = MagnusForce {
            coefficient: DampingCoefficient::from_si(1.0),
            sense: MagnusSpinSense::CounterClockwise,
        };
        assert_eq!(magnus.force(Velocity::ZERO), Force::ZERO);
    }

    #[test]
    fn registry_sums_forces() {
        let mut registry = ForceRegistry::new();
        assert_eq!(registry.net_force(velocity(1.0, 0.0)), Force::ZERO);

        registry.add_force(GravityForce::new(
            AccelerationScalar::from_si(10.0),
            Mass::new::<kilogram>(1.0),
        ));
        registry.add_force(DragForce {
            factor: DragFactor::from_si(1.0),
        });
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.net_force(velocity(2.0, 0.0)).raw(), DVec2::new(-4.0, -10.0));
    }

    #[test]
    fn spring_damper_restores() {
        let spring = SpringDamper {
            spring_constant: Stiffness::from_si(15.0),
            damping: DampingCoefficient::from_si(2.0),
            mass: Mass::new::<kilogram>(0.5),
        };
        let a = spring.acceleration(
            Length::new::<meter>(1.0),
            Speed::new::<meter_per_second>(-1.0),
        );
        assert_relative_eq!(a.get::<meter_per_second_squared>(), -(15.0 - 2.0) / 0.5);
    }
}
