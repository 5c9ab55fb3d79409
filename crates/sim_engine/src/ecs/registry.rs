//! Component registry
//!
//! Owns one sparse-set store per registered component type, assigns each type
//! its signature bit, and builds signatures from type names. Registration is
//! append-only: bits are handed out monotonically from zero and never reused,
//! and re-registering a name is rejected rather than silently replacing the
//! existing store.

use std::collections::HashMap;

use super::component::Component;
use super::entity::Entity;
use super::error::EcsError;
use super::signature::Signature;
use super::storage::{ErasedStore, SparseSet};

struct StoreEntry {
    bit: usize,
    store: Box<dyn ErasedStore>,
}

/// Owns all component stores and the name-to-bit assignment
pub struct ComponentRegistry {
    entries: HashMap<&'static str, StoreEntry>,
    next_bit: usize,
    max_components: usize,
}

impl ComponentRegistry {
    /// Create a registry with room for `max_components` distinct types
    #[must_use]
    pub fn new(max_components: usize) -> Self {
        Self {
            entries: HashMap::new(),
            next_bit: 0,
            max_components,
        }
    }

    /// Reserve the next signature bit for component type `T`
    ///
    /// # Errors
    ///
    /// [`EcsError::DuplicateComponentType`] if `T::NAME` is taken (the first
    /// registration's store is left untouched), or
    /// [`EcsError::ComponentCapacityExceeded`] once every bit is assigned.
    pub fn register<T: Component>(&mut self) -> Result<usize, EcsError> {
        if self.entries.contains_key(T::NAME) {
            return Err(EcsError::DuplicateComponentType(T::NAME));
        }
        if self.next_bit >= self.max_components {
            return Err(EcsError::ComponentCapacityExceeded {
                registered: self.next_bit,
                capacity: self.max_components,
            });
        }

        let bit = self.next_bit;
        self.next_bit += 1;
        self.entries.insert(
            T::NAME,
            StoreEntry {
                bit,
                store: Box::new(SparseSet::<T>::new()),
            },
        );

        Ok(bit)
    }

    /// Insert a component value for the entity
    ///
    /// # Errors
    ///
    /// [`EcsError::UnknownComponentType`] if `T` was never registered, or
    /// [`EcsError::AlreadyAttached`] if the entity already holds a `T`.
    pub fn insert<T: Component>(&mut self, entity: Entity, value: T) -> Result<(), EcsError> {
        let store = self.store_mut::<T>()?;
        if store.contains(entity) {
            return Err(EcsError::AlreadyAttached {
                entity,
                type_name: T::NAME,
            });
        }

        store.insert(entity, value);
        Ok(())
    }

    /// Swap-pop the entity's component value
    ///
    /// # Errors
    ///
    /// [`EcsError::UnknownComponentType`] if `T` was never registered, or
    /// [`EcsError::NotAttached`] if the entity holds no `T`.
    pub fn remove<T: Component>(&mut self, entity: Entity) -> Result<T, EcsError> {
        self.store_mut::<T>()?
            .remove(entity)
            .ok_or(EcsError::NotAttached {
                entity,
                type_name: T::NAME,
            })
    }

    /// Read the entity's component value
    ///
    /// # Errors
    ///
    /// [`EcsError::UnknownComponentType`] if `T` was never registered, or
    /// [`EcsError::NotAttached`] if the entity holds no `T`.
    pub fn get<T: Component>(&self, entity: Entity) -> Result<&T, EcsError> {
        self.store::<T>()?.get(entity).ok_or(EcsError::NotAttached {
            entity,
            type_name: T::NAME,
        })
    }

    /// Mutable access to the entity's component value
    ///
    /// # Errors
    ///
    /// [`EcsError::UnknownComponentType`] if `T` was never registered, or
    /// [`EcsError::NotAttached`] if the entity holds no `T`.
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Result<&mut T, EcsError> {
        self.store_mut::<T>()?
            .get_mut(entity)
            .ok_or(EcsError::NotAttached {
                entity,
                type_name: T::NAME,
            })
    }

    /// Signature bit assigned to a component type name
    ///
    /// # Errors
    ///
    /// [`EcsError::UnknownComponentType`] if the name was never registered.
    pub fn signature_bit(&self, type_name: &str) -> Result<usize, EcsError> {
        self.entries
            .get(type_name)
            .map(|entry| entry.bit)
            .ok_or_else(|| EcsError::UnknownComponentType(type_name.to_string()))
    }

    /// OR together the bits of the named component types
    ///
    /// # Errors
    ///
    /// [`EcsError::UnknownComponentType`] for any unregistered name.
    pub fn build_signature(&self, type_names: &[&str]) -> Result<Signature, EcsError> {
        let mut signature = Signature::new(self.max_components);
        for name in type_names {
            signature.insert(self.signature_bit(name)?);
        }
        Ok(signature)
    }

    /// Remove the entity from every store that holds it
    pub fn purge_entity(&mut self, entity: Entity) {
        for entry in self.entries.values_mut() {
            entry.store.remove_entity(entity);
        }
    }

    /// Number of values currently stored for a component type
    ///
    /// # Errors
    ///
    /// [`EcsError::UnknownComponentType`] if `T` was never registered.
    pub fn count<T: Component>(&self) -> Result<usize, EcsError> {
        Ok(self.store::<T>()?.len())
    }

    /// Number of registered component types
    #[must_use]
    pub fn registered(&self) -> usize {
        self.next_bit
    }

    fn store<T: Component>(&self) -> Result<&SparseSet<T>, EcsError> {
        let entry = self
            .entries
            .get(T::NAME)
            .ok_or_else(|| EcsError::UnknownComponentType(T::NAME.to_string()))?;

        // A name mapping to a store of another type is a core bug, not a
        // caller-recoverable condition.
        Ok(entry
            .store
            .as_any()
            .downcast_ref::<SparseSet<T>>()
            .expect("component store desynchronized from its type name"))
    }

    fn store_mut<T: Component>(&mut self) -> Result<&mut SparseSet<T>, EcsError> {
        let entry = self
            .entries
            .get_mut(T::NAME)
            .ok_or_else(|| EcsError::UnknownComponentType(T::NAME.to_string()))?;

        Ok(entry
            .store
            .as_any_mut()
            .downcast_mut::<SparseSet<T>>()
            .expect("component store desynchronized from its type name"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Health(u32);
    struct Shield(u32);

    impl Component for Health {
        const NAME: &'static str = "health";
    }

    impl Component for Shield {
        const NAME: &'static str = "shield";
    }

    fn entity(id: u32) -> Entity {
        Entity::new(id)
    }

    #[test]
    fn test_bits_assigned_monotonically() {
        let mut registry = ComponentRegistry::new(4);
        assert_eq!(registry.register::<Health>(), Ok(0));
        assert_eq!(registry.register::<Shield>(), Ok(1));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = ComponentRegistry::new(4);
        registry.register::<Health>().unwrap();
        registry.insert(entity(0), Health(30)).unwrap();

        assert_eq!(
            registry.register::<Health>(),
            Err(EcsError::DuplicateComponentType("health"))
        );
        // First registration's store is untouched.
        assert_eq!(registry.get::<Health>(entity(0)).unwrap().0, 30);
    }

    #[test]
    fn test_type_capacity() {
        let mut registry = ComponentRegistry::new(1);
        registry.register::<Health>().unwrap();
        assert_eq!(
            registry.register::<Shield>(),
            Err(EcsError::ComponentCapacityExceeded {
                registered: 1,
                capacity: 1
            })
        );
    }

    #[test]
    fn test_insert_remove_read() {
        let mut registry = ComponentRegistry::new(4);
        registry.register::<Health>().unwrap();

        registry.insert(entity(1), Health(50)).unwrap();
        assert!(matches!(
            registry.insert(entity(1), Health(60)),
            Err(EcsError::AlreadyAttached { .. })
        ));

        assert_eq!(registry.remove::<Health>(entity(1)).unwrap().0, 50);
        assert!(matches!(
            registry.remove::<Health>(entity(1)),
            Err(EcsError::NotAttached { .. })
        ));
        assert!(matches!(
            registry.get::<Health>(entity(1)),
            Err(EcsError::NotAttached { .. })
        ));
    }

    #[test]
    fn test_unknown_type() {
        let registry = ComponentRegistry::new(4);
        assert!(matches!(
            registry.get::<Health>(entity(0)),
            Err(EcsError::UnknownComponentType(_))
        ));
        assert!(matches!(
            registry.signature_bit("health"),
            Err(EcsError::UnknownComponentType(_))
        ));
    }

    #[test]
    fn test_build_signature() {
        let mut registry = ComponentRegistry::new(4);
        registry.register::<Health>().unwrap();
        registry.register::<Shield>().unwrap();

        let signature = registry.build_signature(&["health", "shield"]).unwrap();
        assert!(signature.test(0));
        assert!(signature.test(1));
        assert!(!signature.test(2));
    }

    #[test]
    fn test_purge_entity() {
        let mut registry = ComponentRegistry::new(4);
        registry.register::<Health>().unwrap();
        registry.register::<Shield>().unwrap();

        registry.insert(entity(2), Health(10)).unwrap();
        registry.insert(entity(2), Shield(5)).unwrap();
        registry.insert(entity(3), Health(20)).unwrap();

        registry.purge_entity(entity(2));
        assert!(matches!(
            registry.get::<Health>(entity(2)),
            Err(EcsError::NotAttached { .. })
        ));
        assert!(matches!(
            registry.get::<Shield>(entity(2)),
            Err(EcsError::NotAttached { .. })
        ));
        assert_eq!(registry.get::<Health>(entity(3)).unwrap().0, 20);
    }
}
