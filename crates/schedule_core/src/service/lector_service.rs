//! Lector use-case service.

use crate::model::lector::Lector;
use crate::repo::LectorRepository;
use crate::service::entity_service::EntityService;
use crate::service::error::{not_found_or_failure, ServiceResult};
use crate::validation::{EntityValidator, Validator};
use chrono::NaiveDateTime;
use log::debug;

/// CRUD over lectors plus the time-window lesson count.
pub type LectorService<R, V = EntityValidator> = EntityService<Lector, R, V>;

impl<R, V> EntityService<Lector, R, V>
where
    R: LectorRepository,
    V: Validator<Lector>,
{
    /// Counts lessons starting in `[start, end)`.
    ///
    /// The interval is handed to the repository as given; an inverted
    /// interval is not rejected here.
    pub fn lessons_for_lector(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> ServiceResult<u32> {
        debug!(
            "event=lessons_for_lector module=service status=start entity=lector start={} end={}",
            start, end
        );
        self.repository()
            .lessons_by_time(start, end)
            .map_err(|err| {
                not_found_or_failure::<Lector>("lessons_for_lector", err, || {
                    format!("no lessons between {start} and {end}")
                })
            })
    }
}
