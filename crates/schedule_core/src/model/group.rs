//! Group domain model.

use super::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Study group; lessons are scheduled per group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
}

impl Group {
    /// Creates a group that has not been persisted yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Creates a group referring to an existing row.
    pub fn with_id(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }
}

impl Entity for Group {
    const KIND: &'static str = "group";

    fn id(&self) -> Option<EntityId> {
        self.id
    }
}
