//! ECS error types
//!
//! Every predictable failure in the core (exhausted pools, dead handles,
//! registration-order mistakes) is reported to the caller as an [`EcsError`].
//! The core never terminates the process for these conditions; panics are
//! reserved for internal invariant violations that indicate a bug in the
//! core itself.

use super::entity::Entity;

/// Errors reported by world, registry, and storage operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
    /// The world configuration is unusable
    #[error("invalid world configuration: {0}")]
    InvalidConfig(String),

    /// The entity pool is exhausted
    #[error("entity limit reached ({living} living; capacity {capacity})")]
    CapacityExceeded {
        /// Entities currently alive
        living: usize,
        /// Maximum simultaneously living entities
        capacity: usize,
    },

    /// No signature bits remain for another component type
    #[error("component type limit reached ({registered} registered; capacity {capacity})")]
    ComponentCapacityExceeded {
        /// Component types already registered
        registered: usize,
        /// Maximum registrable component types
        capacity: usize,
    },

    /// The referenced entity is dead or out of range
    #[error("invalid entity handle {0:?}")]
    InvalidEntity(Entity),

    /// The component type name is already registered
    #[error("component type {0:?} is already registered")]
    DuplicateComponentType(&'static str),

    /// The component type name was never registered
    #[error("unknown component type {0:?}")]
    UnknownComponentType(String),

    /// The entity already holds a component of this type
    #[error("entity {entity:?} already has a {type_name:?} component")]
    AlreadyAttached {
        /// Offending entity
        entity: Entity,
        /// Component type name
        type_name: &'static str,
    },

    /// The entity holds no component of this type
    #[error("entity {entity:?} has no {type_name:?} component")]
    NotAttached {
        /// Offending entity
        entity: Entity,
        /// Component type name
        type_name: &'static str,
    },

    /// The system name is already registered
    #[error("system {0:?} is already registered")]
    DuplicateSystem(&'static str),

    /// No system is registered under this name
    #[error("unknown system {0:?}")]
    UnknownSystem(String),
}
