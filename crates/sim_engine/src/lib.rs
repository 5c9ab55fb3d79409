//! # Sim Engine
//!
//! The entity-component-system core of a small real-time simulation framework.
//!
//! ## Features
//!
//! - **Recyclable Entities**: bounded handle pool with O(1) create/destroy
//! - **Sparse-Set Storage**: dense, cache-friendly component storage
//! - **Signature Matching**: bitset signatures decide which systems see which entities
//! - **Typed Access**: generic component accessors, no downcasting at call sites
//! - **Explicit Errors**: every predictable failure is a recoverable [`EcsError`]
//!
//! Rendering, the frame loop, and game code live outside this crate; they drive
//! the world through its public contract only.
//!
//! ## Quick Start
//!
//! ```rust
//! use sim_engine::prelude::*;
//!
//! struct Physics;
//!
//! impl System for Physics {
//!     fn name(&self) -> &'static str {
//!         "physics"
//!     }
//!
//!     fn update(&mut self, mut ctx: SystemContext<'_>, dt: f32) {
//!         for entity in ctx.entities().to_vec() {
//!             let velocity = ctx.read::<RigidBody>(entity).map(|b| b.velocity);
//!             if let (Ok(velocity), Ok(position)) = (velocity, ctx.write::<Position>(entity)) {
//!                 position.value += velocity * dt;
//!             }
//!         }
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut world = World::new();
//!     world.register_component::<Position>()?;
//!     world.register_component::<RigidBody>()?;
//!     world.register_system(Box::new(Physics), &["position", "rigid_body"])?;
//!
//!     let ship = world.create_entity()?;
//!     world.attach_component(ship, Position::new(vec3(0.0, 1.0, 0.0)))?;
//!     world.attach_component(ship, RigidBody::with_velocity(vec3(1.0, 0.0, 0.0)))?;
//!
//!     world.update("physics", 1.0 / 60.0)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod ecs;
pub mod foundation;

pub use config::{Config, ConfigError};
pub use ecs::{
    Component, EcsError, Entity, Signature, System, SystemContext, World, WorldConfig,
};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        ecs::{
            components::{
                Acceleration, Colour, Dimensions, Gravity, Position, RigidBody, Rotation,
                Transform,
            },
            Component, EcsError, Entity, Signature, System, SystemContext, World, WorldConfig,
        },
        foundation::math::{vec3, Vec3},
    };
}
