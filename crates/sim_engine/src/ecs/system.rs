//! System trait and the per-update context
//!
//! A system is a behavioral unit the world drives once per frame over the
//! entities whose signatures cover the system's requirement. Systems never
//! hold a reference back to the world; each update receives a
//! [`SystemContext`] scoped to that call, which exposes the current
//! subscriber set and component values, and none of the entity, signature,
//! or subscriber bookkeeping.

use super::component::Component;
use super::entity::Entity;
use super::error::EcsError;
use super::registry::ComponentRegistry;

/// System trait for processing subscribed entities
pub trait System {
    /// Stable name the world dispatches this system under
    fn name(&self) -> &'static str;

    /// Run one update pass over the current subscribers
    fn update(&mut self, ctx: SystemContext<'_>, dt: f32);
}

/// Per-update accessor handed to [`System::update`]
pub struct SystemContext<'a> {
    entities: &'a [Entity],
    components: &'a mut ComponentRegistry,
}

impl<'a> SystemContext<'a> {
    pub(super) fn new(entities: &'a [Entity], components: &'a mut ComponentRegistry) -> Self {
        Self {
            entities,
            components,
        }
    }

    /// Entities currently subscribed to this system, in subscription order
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        self.entities
    }

    /// Read a component value for one of the subscribed entities
    ///
    /// # Errors
    ///
    /// [`EcsError::UnknownComponentType`] or [`EcsError::NotAttached`] as in
    /// the registry contract.
    pub fn read<T: Component>(&self, entity: Entity) -> Result<&T, EcsError> {
        self.components.get::<T>(entity)
    }

    /// Mutate a component value for one of the subscribed entities
    ///
    /// # Errors
    ///
    /// [`EcsError::UnknownComponentType`] or [`EcsError::NotAttached`] as in
    /// the registry contract.
    pub fn write<T: Component>(&mut self, entity: Entity) -> Result<&mut T, EcsError> {
        self.components.get_mut::<T>(entity)
    }
}
