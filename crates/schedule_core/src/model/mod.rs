//! Domain model for the schedule core.
//!
//! # Responsibility
//! - Define the value objects passed between callers, services and
//!   repositories.
//!
//! # Invariants
//! - An id of `None` or `0` means "not yet persisted". Such an id is only
//!   meaningful for create.

pub mod group;
pub mod lector;

/// Storage identifier shared by every entity family.
pub type EntityId = i64;

/// Common surface the generic service needs from an entity.
pub trait Entity {
    /// Lowercase human-readable entity name used in messages and log events.
    const KIND: &'static str;

    /// Persisted identifier, if any.
    fn id(&self) -> Option<EntityId>;
}

/// Returns the id when it refers to a persisted row.
pub fn persisted_id(id: Option<EntityId>) -> Option<EntityId> {
    id.filter(|value| *value != 0)
}
