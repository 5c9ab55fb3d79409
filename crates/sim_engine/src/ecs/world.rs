//! ECS World implementation
//!
//! The world is the single coordinator callers talk to. It owns the entity
//! manager, the component registry, and the system registry, and it alone
//! sequences a mutation: storage first, then the entity's signature, then
//! subscriber lists. Between top-level calls no reader can observe a
//! half-applied mutation; the crate assumes single-threaded use (callers with
//! background producers must serialize access themselves, e.g. through a
//! command queue drained once per frame).

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::component::Component;
use super::entity::{Entity, EntityManager};
use super::error::EcsError;
use super::registry::ComponentRegistry;
use super::signature::Signature;
use super::system::System;
use super::systems::SystemRegistry;
use crate::config::Config;

/// Capacity configuration, fixed at world construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Maximum number of simultaneously living entities
    pub max_entities: usize,

    /// Maximum number of distinct component types ever registered
    pub max_components: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            max_entities: 10_000,
            max_components: 32,
        }
    }
}

impl Config for WorldConfig {}

impl WorldConfig {
    /// Check the capacities are usable
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_entities == 0 {
            return Err("max_entities must be at least 1".to_string());
        }
        if self.max_entities > u32::MAX as usize {
            return Err(format!("max_entities must fit in u32 (got {})", self.max_entities));
        }
        if self.max_components == 0 {
            return Err("max_components must be at least 1".to_string());
        }
        Ok(())
    }
}

/// ECS World containing all entities, components, and systems
pub struct World {
    entities: EntityManager,
    components: ComponentRegistry,
    systems: SystemRegistry,
}

impl World {
    /// Create a world with default capacities
    #[must_use]
    pub fn new() -> Self {
        // The default configuration always passes validation.
        Self::from_config(WorldConfig::default())
    }

    /// Create a world with explicit capacities
    ///
    /// # Errors
    ///
    /// [`EcsError::InvalidConfig`] if the configuration fails
    /// [`WorldConfig::validate`].
    pub fn with_config(config: WorldConfig) -> Result<Self, EcsError> {
        config.validate().map_err(EcsError::InvalidConfig)?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: WorldConfig) -> Self {
        debug!(
            "creating world: max_entities={}, max_components={}",
            config.max_entities, config.max_components
        );

        Self {
            entities: EntityManager::new(config.max_entities, config.max_components),
            components: ComponentRegistry::new(config.max_components),
            systems: SystemRegistry::new(),
        }
    }

    /// Add a new living entity to the world
    ///
    /// # Errors
    ///
    /// [`EcsError::CapacityExceeded`] once `max_entities` are alive.
    pub fn create_entity(&mut self) -> Result<Entity, EcsError> {
        let entity = self.entities.create()?;
        trace!("created entity {}", entity.id());
        Ok(entity)
    }

    /// Destroy an entity and release all of its resources
    ///
    /// Purges the entity from every component store and every system's
    /// subscriber list, then recycles the handle.
    ///
    /// # Errors
    ///
    /// [`EcsError::InvalidEntity`] for dead or out-of-range handles.
    pub fn destroy(&mut self, entity: Entity) -> Result<(), EcsError> {
        self.entities.destroy(entity)?;
        self.components.purge_entity(entity);
        self.systems.entity_destroyed(entity);
        trace!("destroyed entity {}", entity.id());
        Ok(())
    }

    /// Reserve a signature bit and a store for component type `T`
    ///
    /// # Errors
    ///
    /// [`EcsError::DuplicateComponentType`] or
    /// [`EcsError::ComponentCapacityExceeded`] per the registry contract.
    pub fn register_component<T: Component>(&mut self) -> Result<(), EcsError> {
        let bit = self.components.register::<T>()?;
        debug!("registered component type {:?} as bit {}", T::NAME, bit);
        Ok(())
    }

    /// Register a system under its own name, requiring the named components
    ///
    /// The required signature is built once here and never changes. A system
    /// registered with no required components matches no entity.
    ///
    /// # Errors
    ///
    /// [`EcsError::UnknownComponentType`] for an unregistered requirement, or
    /// [`EcsError::DuplicateSystem`] for a name collision.
    pub fn register_system(
        &mut self,
        system: Box<dyn System>,
        required: &[&str],
    ) -> Result<(), EcsError> {
        let name = system.name();
        let signature = self.components.build_signature(required)?;
        self.systems.register(signature, system)?;
        debug!("registered system {:?} requiring {:?}", name, required);
        Ok(())
    }

    /// Attach a component value to a living entity
    ///
    /// Storage is updated first, then the entity's signature gains the
    /// type's bit, then every system re-evaluates its interest.
    ///
    /// # Errors
    ///
    /// [`EcsError::InvalidEntity`], [`EcsError::UnknownComponentType`], or
    /// [`EcsError::AlreadyAttached`].
    pub fn attach_component<T: Component>(
        &mut self,
        entity: Entity,
        value: T,
    ) -> Result<(), EcsError> {
        if !self.entities.is_alive(entity) {
            return Err(EcsError::InvalidEntity(entity));
        }

        let bit = self.components.signature_bit(T::NAME)?;
        self.components.insert(entity, value)?;

        let mut signature = self.entities.signature(entity);
        signature.insert(bit);
        self.entities.set_signature(entity, signature.clone());
        self.systems.signature_changed(entity, &signature);

        trace!("attached {:?} to entity {}", T::NAME, entity.id());
        Ok(())
    }

    /// Detach a component value from a living entity
    ///
    /// Mirror of [`World::attach_component`]: storage shrinks first, then the
    /// signature drops the bit, then subscriber lists are updated.
    ///
    /// # Errors
    ///
    /// [`EcsError::InvalidEntity`], [`EcsError::UnknownComponentType`], or
    /// [`EcsError::NotAttached`].
    pub fn detach_component<T: Component>(&mut self, entity: Entity) -> Result<T, EcsError> {
        if !self.entities.is_alive(entity) {
            return Err(EcsError::InvalidEntity(entity));
        }

        let bit = self.components.signature_bit(T::NAME)?;
        let value = self.components.remove::<T>(entity)?;

        let mut signature = self.entities.signature(entity);
        signature.remove(bit);
        self.entities.set_signature(entity, signature.clone());
        self.systems.signature_changed(entity, &signature);

        trace!("detached {:?} from entity {}", T::NAME, entity.id());
        Ok(value)
    }

    /// Read a component value for a living entity
    ///
    /// # Errors
    ///
    /// [`EcsError::InvalidEntity`], [`EcsError::UnknownComponentType`], or
    /// [`EcsError::NotAttached`] when no value is present.
    pub fn read_component<T: Component>(&self, entity: Entity) -> Result<&T, EcsError> {
        if !self.entities.is_alive(entity) {
            return Err(EcsError::InvalidEntity(entity));
        }
        self.components.get::<T>(entity)
    }

    /// Mutable access to a component value for a living entity
    ///
    /// # Errors
    ///
    /// [`EcsError::InvalidEntity`], [`EcsError::UnknownComponentType`], or
    /// [`EcsError::NotAttached`] when no value is present.
    pub fn read_component_mut<T: Component>(&mut self, entity: Entity) -> Result<&mut T, EcsError> {
        if !self.entities.is_alive(entity) {
            return Err(EcsError::InvalidEntity(entity));
        }
        self.components.get_mut::<T>(entity)
    }

    /// Number of values currently stored for component type `T`
    ///
    /// # Errors
    ///
    /// [`EcsError::UnknownComponentType`] if `T` was never registered.
    pub fn component_count<T: Component>(&self) -> Result<usize, EcsError> {
        self.components.count::<T>()
    }

    /// The entity's current signature; dead handles read as empty
    #[must_use]
    pub fn entity_signature(&self, entity: Entity) -> Signature {
        self.entities.signature(entity)
    }

    /// Total count of living entities
    #[must_use]
    pub fn living_entities(&self) -> usize {
        self.entities.living()
    }

    /// The entities a named system will iterate on its next update
    ///
    /// # Errors
    ///
    /// [`EcsError::UnknownSystem`] if the name was never registered.
    pub fn subscribers(&self, name: &str) -> Result<&[Entity], EcsError> {
        self.systems.subscribers(name)
    }

    /// Names of all registered systems, in arbitrary order
    pub fn system_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.systems.names()
    }

    /// Run one update pass of the named system
    ///
    /// The core imposes no ordering between systems; the caller invokes each
    /// system it wants, in the order it wants, once per frame.
    ///
    /// # Errors
    ///
    /// [`EcsError::UnknownSystem`] if the name was never registered.
    pub fn update(&mut self, name: &str, dt: f32) -> Result<(), EcsError> {
        self.systems.dispatch(name, &mut self.components, dt)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorldConfig::default();
        assert_eq!(config.max_entities, 10_000);
        assert_eq!(config.max_components, 32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let config = WorldConfig {
            max_entities: 0,
            max_components: 8,
        };
        assert!(config.validate().is_err());

        let config = WorldConfig {
            max_entities: 8,
            max_components: 0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let zero_entities = WorldConfig {
            max_entities: 0,
            max_components: 8,
        };
        assert!(matches!(
            World::with_config(zero_entities),
            Err(EcsError::InvalidConfig(_))
        ));

        // Handles are u32; a wider pool would truncate ids on allocation.
        let oversized = WorldConfig {
            max_entities: u32::MAX as usize + 1,
            max_components: 8,
        };
        assert!(matches!(
            World::with_config(oversized),
            Err(EcsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = WorldConfig {
            max_entities: 64,
            max_components: 8,
        };
        let text = toml::to_string(&config).expect("serialize");
        let loaded: WorldConfig = toml::from_str(&text).expect("parse");
        assert_eq!(loaded.max_entities, 64);
        assert_eq!(loaded.max_components, 8);
    }
}
