//! Entity handles and the entity manager
//!
//! Entities are opaque recyclable handles drawn from a bounded pool. The
//! manager owns the free list, the aliveness flags, and each living entity's
//! component signature.

use std::collections::VecDeque;

use super::error::EcsError;
use super::signature::Signature;

/// Entity identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    id: u32,
}

impl Entity {
    /// Create a new entity with the given ID
    pub(super) fn new(id: u32) -> Self {
        Self { id }
    }

    /// Get the entity ID
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    pub(super) fn index(self) -> usize {
        self.id as usize
    }
}

/// Owns the pool of entity handles, recycling, and per-entity signatures
#[derive(Debug)]
pub struct EntityManager {
    available: VecDeque<Entity>,
    alive: Vec<bool>,
    signatures: Vec<Signature>,
    living: usize,
    max_entities: usize,
    signature_width: usize,
}

impl EntityManager {
    /// Create a manager with a pool of `max_entities` handles, each starting
    /// with an empty signature of `signature_width` bits
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(max_entities: usize, signature_width: usize) -> Self {
        debug_assert!(max_entities <= u32::MAX as usize);
        let available = (0..max_entities).map(|id| Entity::new(id as u32)).collect();

        Self {
            available,
            alive: vec![false; max_entities],
            signatures: vec![Signature::new(signature_width); max_entities],
            living: 0,
            max_entities,
            signature_width,
        }
    }

    /// Reserve an unused handle from the pool
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::CapacityExceeded`] once `max_entities` handles are
    /// simultaneously alive.
    pub fn create(&mut self) -> Result<Entity, EcsError> {
        let entity = self.available.pop_front().ok_or(EcsError::CapacityExceeded {
            living: self.living,
            capacity: self.max_entities,
        })?;

        self.alive[entity.index()] = true;
        self.living += 1;

        Ok(entity)
    }

    /// Return a handle to the pool, clearing its signature
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::InvalidEntity`] for dead or out-of-range handles.
    pub fn destroy(&mut self, entity: Entity) -> Result<(), EcsError> {
        self.check_alive(entity)?;

        self.signatures[entity.index()].clear();
        self.alive[entity.index()] = false;
        self.available.push_back(entity);
        self.living -= 1;

        Ok(())
    }

    /// True while the handle refers to a living entity
    #[must_use]
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.alive.get(entity.index()).copied().unwrap_or(false)
    }

    fn check_alive(&self, entity: Entity) -> Result<(), EcsError> {
        if self.is_alive(entity) {
            Ok(())
        } else {
            Err(EcsError::InvalidEntity(entity))
        }
    }

    /// Overwrite the entity's signature
    pub(super) fn set_signature(&mut self, entity: Entity, signature: Signature) {
        debug_assert!(self.is_alive(entity), "signature write to dead entity");
        self.signatures[entity.index()] = signature;
    }

    /// Read the entity's signature; dead or out-of-range handles read as empty
    #[must_use]
    pub fn signature(&self, entity: Entity) -> Signature {
        if self.is_alive(entity) {
            self.signatures[entity.index()].clone()
        } else {
            Signature::new(self.signature_width)
        }
    }

    /// Number of currently living entities
    #[must_use]
    pub fn living(&self) -> usize {
        self.living
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_destroy_round_trip() {
        let mut manager = EntityManager::new(4, 8);
        let entity = manager.create().expect("pool has room");
        assert!(manager.is_alive(entity));
        assert_eq!(manager.living(), 1);

        manager.destroy(entity).expect("entity is alive");
        assert!(!manager.is_alive(entity));
        assert_eq!(manager.living(), 0);
    }

    #[test]
    fn test_pool_exhaustion() {
        let mut manager = EntityManager::new(2, 8);
        manager.create().unwrap();
        manager.create().unwrap();

        assert_eq!(
            manager.create(),
            Err(EcsError::CapacityExceeded {
                living: 2,
                capacity: 2
            })
        );
    }

    #[test]
    fn test_destroy_dead_handle_rejected() {
        let mut manager = EntityManager::new(2, 8);
        let entity = manager.create().unwrap();
        manager.destroy(entity).unwrap();

        assert_eq!(manager.destroy(entity), Err(EcsError::InvalidEntity(entity)));
    }

    #[test]
    fn test_recycled_handle_reads_empty_signature() {
        let mut manager = EntityManager::new(1, 8);
        let entity = manager.create().unwrap();

        let mut signature = manager.signature(entity);
        signature.insert(3);
        manager.set_signature(entity, signature);
        manager.destroy(entity).unwrap();

        let recycled = manager.create().unwrap();
        assert_eq!(recycled.id(), entity.id());
        assert!(manager.signature(recycled).is_empty());
    }

    #[test]
    fn test_handle_never_alive_twice() {
        let mut manager = EntityManager::new(3, 8);
        let a = manager.create().unwrap();
        let b = manager.create().unwrap();
        assert_ne!(a, b);

        manager.destroy(a).unwrap();
        let c = manager.create().unwrap();
        assert_ne!(b, c);
    }
}
