//! Entity-Component-System implementation
//!
//! Provides the ECS architecture for simulation logic: recyclable entity
//! handles, sparse-set component storage, and bitset-signature matching that
//! keeps each system's subscriber list current as components come and go.

pub mod component;
pub mod components;
pub mod entity;
pub mod error;
pub mod registry;
pub mod signature;
pub mod storage;
pub mod system;
pub mod systems;
pub mod world;

pub use component::Component;
pub use entity::Entity;
pub use error::EcsError;
pub use signature::Signature;
pub use system::{System, SystemContext};
pub use world::{World, WorldConfig};

#[cfg(test)]
mod tests;
