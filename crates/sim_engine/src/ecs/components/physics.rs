//! Motion components: acceleration, gravity, and rigid bodies

use crate::ecs::Component;
use crate::foundation::math::Vec3;

/// Rate at which an object gains velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Acceleration {
    /// Acceleration vector in units per second squared
    pub value: Vec3,
}

impl Acceleration {
    /// Create an acceleration from a vector
    #[must_use]
    pub fn new(value: Vec3) -> Self {
        Self { value }
    }
}

impl Default for Acceleration {
    fn default() -> Self {
        Self::new(Vec3::zeros())
    }
}

impl Component for Acceleration {
    const NAME: &'static str = "acceleration";
}

/// Constant force an object is under
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    /// Force vector applied every update
    pub force: Vec3,
}

impl Gravity {
    /// Create a gravity component from a force vector
    #[must_use]
    pub fn new(force: Vec3) -> Self {
        Self { force }
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new(Vec3::zeros())
    }
}

impl Component for Gravity {
    const NAME: &'static str = "gravity";
}

/// A solid body whose deformation is negligible: carries velocity and the
/// acceleration acting on it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBody {
    /// Current velocity in units per second
    pub velocity: Vec3,
    /// Acceleration applied to the velocity each update
    pub acceleration: Vec3,
}

impl RigidBody {
    /// Create a body at rest
    #[must_use]
    pub fn new() -> Self {
        Self {
            velocity: Vec3::zeros(),
            acceleration: Vec3::zeros(),
        }
    }

    /// Create a body with an initial velocity
    #[must_use]
    pub fn with_velocity(velocity: Vec3) -> Self {
        Self {
            velocity,
            acceleration: Vec3::zeros(),
        }
    }

    /// Advance velocity by the acceleration over `dt` seconds
    pub fn integrate(&mut self, dt: f32) {
        self.velocity += self.acceleration * dt;
    }
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for RigidBody {
    const NAME: &'static str = "rigid_body";
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_rigid_body_integration() {
        let mut body = RigidBody::with_velocity(Vec3::new(1.0, 0.0, 0.0));
        body.acceleration = Vec3::new(0.0, -9.8, 0.0);

        body.integrate(0.5);
        assert_relative_eq!(body.velocity.x, 1.0);
        assert_relative_eq!(body.velocity.y, -4.9);
    }
}
