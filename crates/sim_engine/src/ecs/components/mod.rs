//! Stock components
//!
//! The concrete data fragments the engine ships for common simulation needs.
//! All of them are optional: worlds register only the types they use, and
//! user crates add their own by implementing [`Component`](super::Component).

pub mod appearance;
pub mod physics;
pub mod transform;

pub use appearance::Colour;
pub use physics::{Acceleration, Gravity, RigidBody};
pub use transform::{Dimensions, Position, Rotation, Transform};
