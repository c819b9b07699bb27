//! Group use-case service.

use crate::model::group::Group;
use crate::model::EntityId;
use crate::repo::GroupRepository;
use crate::service::entity_service::EntityService;
use crate::service::error::{not_found_or_failure, require_id, ServiceResult};
use crate::validation::{EntityValidator, Validator};
use log::debug;

/// CRUD over groups plus the per-group lesson count.
pub type GroupService<R, V = EntityValidator> = EntityService<Group, R, V>;

impl<R, V> EntityService<Group, R, V>
where
    R: GroupRepository,
    V: Validator<Group>,
{
    /// Counts lessons scheduled for one group.
    ///
    /// # Errors
    /// - `MissingIdentifier` when `id` is zero.
    /// - `NoSuchEntity` when the repository reports the group or its lessons
    ///   missing.
    pub fn lessons_for_group(&self, id: EntityId) -> ServiceResult<u32> {
        debug!(
            "event=lessons_for_group module=service status=start entity=group id={}",
            id
        );
        let id = require_id::<Group>("lessons_for_group", Some(id))?;
        self.repository().lessons_by_id(id).map_err(|err| {
            not_found_or_failure::<Group>("lessons_for_group", err, || {
                format!("no lessons for group {id}")
            })
        })
    }
}
