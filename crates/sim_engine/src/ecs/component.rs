//! Component trait
//!
//! A component is a plain data fragment attachable to an entity. Every
//! component type carries a stable name; the name keys the registry, the
//! per-type store, and the signature bit assigned at registration. Access is
//! typed end to end: callers never downcast.

/// Marker trait for components
pub trait Component: 'static + Send + Sync {
    /// Stable type name used as the registry and store key
    const NAME: &'static str;
}
