//! Lector (instructor) domain model.

use super::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Instructor teaching scheduled lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub first_name: String,
    pub last_name: String,
}

impl Lector {
    /// Creates a lector that has not been persisted yet.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Creates a lector referring to an existing row.
    pub fn with_id(
        id: EntityId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(first_name, last_name)
        }
    }

    /// Display name in `First Last` order.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Lector {
    const KIND: &'static str = "lector";

    fn id(&self) -> Option<EntityId> {
        self.id
    }
}
