//! System registry and subscriber bookkeeping
//!
//! Tracks every registered system, its immutable required signature, and its
//! current subscriber list. Membership is maintained incrementally: every
//! signature change re-evaluates each system's superset test for the changed
//! entity, and destruction purges the entity everywhere. Subscriber removal
//! is swap-pop, mirroring the component stores, so both paths stay O(1).

use std::collections::HashMap;

use super::entity::Entity;
use super::error::EcsError;
use super::registry::ComponentRegistry;
use super::signature::Signature;
use super::system::{System, SystemContext};

struct SystemEntry {
    required: Signature,
    subscribers: Vec<Entity>,
    slots: HashMap<Entity, usize>,
    system: Box<dyn System>,
}

impl SystemEntry {
    fn matches(&self, signature: &Signature) -> bool {
        // An empty requirement matches nothing; a system that wants every
        // entity must say so through a component, not through a default.
        !self.required.is_empty() && signature.contains(&self.required)
    }

    fn subscribe(&mut self, entity: Entity) {
        self.slots.insert(entity, self.subscribers.len());
        self.subscribers.push(entity);
    }

    fn unsubscribe(&mut self, entity: Entity) {
        if let Some(slot) = self.slots.remove(&entity) {
            self.subscribers.swap_remove(slot);
            if let Some(&moved) = self.subscribers.get(slot) {
                self.slots.insert(moved, slot);
            }
        }
    }
}

/// Owns registered systems and their subscriber lists
pub struct SystemRegistry {
    systems: HashMap<&'static str, SystemEntry>,
}

impl SystemRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            systems: HashMap::new(),
        }
    }

    /// Register a system under its own name with an immutable requirement
    ///
    /// # Errors
    ///
    /// [`EcsError::DuplicateSystem`] if the name is already registered.
    pub fn register(
        &mut self,
        required: Signature,
        system: Box<dyn System>,
    ) -> Result<(), EcsError> {
        let name = system.name();
        if self.systems.contains_key(name) {
            return Err(EcsError::DuplicateSystem(name));
        }

        self.systems.insert(
            name,
            SystemEntry {
                required,
                subscribers: Vec::new(),
                slots: HashMap::new(),
                system,
            },
        );

        Ok(())
    }

    /// Re-evaluate every system's interest in an entity whose signature changed
    pub fn signature_changed(&mut self, entity: Entity, signature: &Signature) {
        for entry in self.systems.values_mut() {
            let subscribed = entry.slots.contains_key(&entity);
            if entry.matches(signature) {
                if !subscribed {
                    entry.subscribe(entity);
                }
            } else if subscribed {
                entry.unsubscribe(entity);
            }
        }
    }

    /// Remove a destroyed entity from every subscriber list
    pub fn entity_destroyed(&mut self, entity: Entity) {
        for entry in self.systems.values_mut() {
            entry.unsubscribe(entity);
        }
    }

    /// The entities a named system will iterate, in subscription order
    ///
    /// # Errors
    ///
    /// [`EcsError::UnknownSystem`] if the name was never registered.
    pub fn subscribers(&self, name: &str) -> Result<&[Entity], EcsError> {
        self.systems
            .get(name)
            .map(|entry| entry.subscribers.as_slice())
            .ok_or_else(|| EcsError::UnknownSystem(name.to_string()))
    }

    /// Run one update pass of the named system over its subscribers
    ///
    /// # Errors
    ///
    /// [`EcsError::UnknownSystem`] if the name was never registered.
    pub fn dispatch(
        &mut self,
        name: &str,
        components: &mut ComponentRegistry,
        dt: f32,
    ) -> Result<(), EcsError> {
        let entry = self
            .systems
            .get_mut(name)
            .ok_or_else(|| EcsError::UnknownSystem(name.to_string()))?;

        let SystemEntry {
            subscribers,
            system,
            ..
        } = entry;
        system.update(SystemContext::new(subscribers, components), dt);

        Ok(())
    }

    /// Names of all registered systems, in arbitrary order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.systems.keys().copied()
    }
}

impl Default for SystemRegistry {
    fn default() -> Self {
        Self::new()
    }
}
