//! SQLite-backed lector repository.
//!
//! Lesson times are stored as text through rusqlite's chrono support, so the
//! lexicographic order of `start_time` matches chronological order.

use super::group_repo::count_to_u32;
use super::{LectorRepository, RepoError, RepoResult, Repository};
use crate::model::lector::Lector;
use crate::model::EntityId;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};

const LECTOR_SELECT_SQL: &str = "SELECT id, first_name, last_name FROM lectors";

pub struct SqliteLectorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLectorRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl Repository<Lector> for SqliteLectorRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<Lector>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LECTOR_SELECT_SQL} ORDER BY id ASC;"))?;
        let lectors = stmt
            .query_map([], parse_lector_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        if lectors.is_empty() {
            return Err(RepoError::NotFound("no lectors stored".to_string()));
        }
        Ok(lectors)
    }

    fn get_by_id(&self, id: EntityId) -> RepoResult<Lector> {
        self.conn
            .query_row(
                &format!("{LECTOR_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_lector_row,
            )
            .optional()?
            .ok_or_else(|| RepoError::NotFound(format!("lector {id}")))
    }

    fn create(&self, lector: &Lector) -> RepoResult<bool> {
        let inserted = self.conn.execute(
            "INSERT INTO lectors (first_name, last_name) VALUES (?1, ?2);",
            params![lector.first_name.trim(), lector.last_name.trim()],
        )?;
        Ok(inserted == 1)
    }

    fn update(&self, lector: &Lector) -> RepoResult<bool> {
        let Some(id) = lector.id else {
            return Ok(false);
        };
        let changed = self.conn.execute(
            "UPDATE lectors SET first_name = ?1, last_name = ?2 WHERE id = ?3;",
            params![lector.first_name.trim(), lector.last_name.trim(), id],
        )?;
        Ok(changed == 1)
    }

    fn delete(&self, id: EntityId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM lectors WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound(format!("lector {id}")));
        }
        Ok(true)
    }
}

impl LectorRepository for SqliteLectorRepository<'_> {
    fn lessons_by_time(&self, start: NaiveDateTime, end: NaiveDateTime) -> RepoResult<u32> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM lessons WHERE start_time >= ?1 AND start_time < ?2;",
            params![start, end],
            |row| row.get(0),
        )?;
        if count == 0 {
            return Err(RepoError::NotFound(format!(
                "lessons between {start} and {end}"
            )));
        }
        count_to_u32(count)
    }
}

fn parse_lector_row(row: &Row<'_>) -> rusqlite::Result<Lector> {
    Ok(Lector {
        id: Some(row.get("id")?),
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
    })
}
