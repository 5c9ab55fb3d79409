//! Math utilities and types
//!
//! Provides the vector types shared by the stock components and any math
//! user code layers on top of them.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Construct a [`Vec3`] from its components
#[must_use]
pub fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}
