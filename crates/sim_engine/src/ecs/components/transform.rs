//! Spatial components: position, rotation, and 2D geometry

use crate::ecs::Component;
use crate::foundation::math::Vec3;

/// Location of an object in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// World-space coordinates
    pub value: Vec3,
}

impl Position {
    /// Create a position at the given coordinates
    #[must_use]
    pub fn new(value: Vec3) -> Self {
        Self { value }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(Vec3::zeros())
    }
}

impl Component for Position {
    const NAME: &'static str = "position";
}

/// Angle transformation of an object, in integer degrees per axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rotation {
    /// Rotation around the X axis
    pub x: i32,
    /// Rotation around the Y axis
    pub y: i32,
    /// Rotation around the Z axis
    pub z: i32,
}

impl Component for Rotation {
    const NAME: &'static str = "rotation";
}

/// 2D geometry of an object in the world
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dimensions {
    /// Width of the bounding box
    pub width: f32,
    /// Height of the bounding box
    pub height: f32,
    /// Radius, for round objects
    pub radius: f32,
}

impl Dimensions {
    /// Create a rectangular extent
    #[must_use]
    pub fn rect(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            radius: 0.0,
        }
    }

    /// Create a circular extent
    #[must_use]
    pub fn circle(radius: f32) -> Self {
        Self {
            width: radius * 2.0,
            height: radius * 2.0,
            radius,
        }
    }
}

impl Component for Dimensions {
    const NAME: &'static str = "dimensions";
}

/// Combined placement: position, rotation, geometry, and scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position
    pub position: Position,
    /// Orientation
    pub rotation: Rotation,
    /// Object geometry
    pub dimensions: Dimensions,
    /// Per-axis scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Position::default(),
            rotation: Rotation::default(),
            dimensions: Dimensions::default(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Component for Transform {
    const NAME: &'static str = "transform";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_helpers() {
        let circle = Dimensions::circle(2.0);
        assert_eq!(circle.width, 4.0);
        assert_eq!(circle.radius, 2.0);

        let rect = Dimensions::rect(3.0, 5.0);
        assert_eq!(rect.height, 5.0);
        assert_eq!(rect.radius, 0.0);
    }

    #[test]
    fn test_transform_default_scale_is_identity() {
        let transform = Transform::default();
        assert_eq!(transform.scale, Vec3::new(1.0, 1.0, 1.0));
    }
}
