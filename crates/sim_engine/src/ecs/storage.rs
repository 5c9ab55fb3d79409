//! Sparse-set component storage
//!
//! One [`SparseSet`] exists per registered component type. Values live in a
//! dense, contiguous array for cache-friendly iteration; a parallel dense
//! array records each slot's owning entity, and a sparse entity-indexed array
//! maps back to slots. Removal swaps the doomed slot with the last occupied
//! one and pops, so the dense region never holds a stale slot.

use std::any::Any;

use super::component::Component;
use super::entity::Entity;

/// Sentinel marking the absence of a component in the sparse array
const EMPTY: usize = usize::MAX;

/// Dense storage for one component type
///
/// Invariants:
/// - occupied slots are exactly `[0, len)`
/// - an entity occupies at most one slot, and every slot has one owner
/// - `sparse[entity]` is valid only while the entity occupies a slot here
#[derive(Debug)]
pub struct SparseSet<T> {
    dense: Vec<T>,
    entities: Vec<Entity>,
    sparse: Vec<usize>,
}

impl<T> SparseSet<T> {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self {
            dense: Vec::new(),
            entities: Vec::new(),
            sparse: Vec::new(),
        }
    }

    /// True if the entity occupies a slot
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.sparse
            .get(entity.index())
            .is_some_and(|&slot| slot != EMPTY)
    }

    /// Append a new slot for the entity
    ///
    /// The caller (the registry) guarantees the entity is not already present.
    pub fn insert(&mut self, entity: Entity, value: T) {
        debug_assert!(!self.contains(entity), "entity already occupies a slot");

        let index = entity.index();
        if index >= self.sparse.len() {
            self.sparse.resize(index + 1, EMPTY);
        }

        self.sparse[index] = self.dense.len();
        self.dense.push(value);
        self.entities.push(entity);
    }

    /// Swap-and-pop the entity's slot; returns the removed value
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let index = entity.index();
        let slot = *self.sparse.get(index)?;
        if slot == EMPTY {
            return None;
        }

        let value = self.dense.swap_remove(slot);
        self.entities.swap_remove(slot);
        self.sparse[index] = EMPTY;

        // The previously-last slot's owner moved into the vacated slot.
        if let Some(&moved) = self.entities.get(slot) {
            self.sparse[moved.index()] = slot;
        }

        Some(value)
    }

    /// Shared access to the entity's value
    #[must_use]
    pub fn get(&self, entity: Entity) -> Option<&T> {
        let slot = *self.sparse.get(entity.index())?;
        if slot == EMPTY {
            return None;
        }
        Some(&self.dense[slot])
    }

    /// Mutable access to the entity's value
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        let slot = *self.sparse.get(entity.index())?;
        if slot == EMPTY {
            return None;
        }
        Some(&mut self.dense[slot])
    }

    /// Number of occupied slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    /// True if no slot is occupied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Iterate `(owner, value)` pairs in dense order
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        debug_assert_eq!(self.entities.len(), self.dense.len());
        self.entities.iter().copied().zip(self.dense.iter())
    }
}

impl<T> Default for SparseSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform contract the registry uses to hold stores of differing value types
pub(super) trait ErasedStore: Any {
    /// Drop the entity's slot if present; true if a slot was removed
    fn remove_entity(&mut self, entity: Entity) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ErasedStore for SparseSet<T> {
    fn remove_entity(&mut self, entity: Entity) -> bool {
        self.remove(entity).is_some()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: u32) -> Entity {
        Entity::new(id)
    }

    #[test]
    fn test_insert_and_get() {
        let mut set = SparseSet::new();
        set.insert(entity(2), "a");
        set.insert(entity(7), "b");

        assert_eq!(set.get(entity(2)), Some(&"a"));
        assert_eq!(set.get(entity(7)), Some(&"b"));
        assert_eq!(set.get(entity(3)), None);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove_compacts_storage() {
        let mut set = SparseSet::new();
        set.insert(entity(0), 10);
        set.insert(entity(1), 11);
        set.insert(entity(2), 12);

        assert_eq!(set.remove(entity(0)), Some(10));
        assert_eq!(set.len(), 2);

        // Survivors read unchanged after the swap.
        assert_eq!(set.get(entity(1)), Some(&11));
        assert_eq!(set.get(entity(2)), Some(&12));
        assert_eq!(set.get(entity(0)), None);
    }

    #[test]
    fn test_remove_last_slot() {
        let mut set = SparseSet::new();
        set.insert(entity(4), 1.5);
        assert_eq!(set.remove(entity(4)), Some(1.5));
        assert!(set.is_empty());
        assert_eq!(set.remove(entity(4)), None);
    }

    #[test]
    fn test_reinsert_after_remove() {
        let mut set = SparseSet::new();
        set.insert(entity(3), 'x');
        set.remove(entity(3));
        set.insert(entity(3), 'y');
        assert_eq!(set.get(entity(3)), Some(&'y'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iter_dense_order() {
        let mut set = SparseSet::new();
        set.insert(entity(5), 50);
        set.insert(entity(1), 10);

        let pairs: Vec<_> = set.iter().map(|(e, v)| (e.id(), *v)).collect();
        assert_eq!(pairs, vec![(5, 50), (1, 10)]);
    }

    #[test]
    fn test_get_mut() {
        let mut set = SparseSet::new();
        set.insert(entity(0), 1);
        *set.get_mut(entity(0)).unwrap() += 5;
        assert_eq!(set.get(entity(0)), Some(&6));
    }
}
