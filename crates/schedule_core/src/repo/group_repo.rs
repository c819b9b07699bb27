//! SQLite-backed group repository.
//!
//! # Invariants
//! - `create` ignores any id on the entity; SQLite assigns it.
//! - `lessons_by_id` reports `NotFound` for an unknown group, not for a
//!   known group without lessons.

use super::{GroupRepository, RepoError, RepoResult, Repository};
use crate::model::group::Group;
use crate::model::EntityId;
use rusqlite::{params, Connection, OptionalExtension, Row};

const GROUP_SELECT_SQL: &str = "SELECT id, name FROM groups";

pub struct SqliteGroupRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGroupRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn exists(&self, id: EntityId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM groups WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

impl Repository<Group> for SqliteGroupRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<Group>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{GROUP_SELECT_SQL} ORDER BY id ASC;"))?;
        let groups = stmt
            .query_map([], parse_group_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        if groups.is_empty() {
            return Err(RepoError::NotFound("no groups stored".to_string()));
        }
        Ok(groups)
    }

    fn get_by_id(&self, id: EntityId) -> RepoResult<Group> {
        self.conn
            .query_row(
                &format!("{GROUP_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_group_row,
            )
            .optional()?
            .ok_or_else(|| RepoError::NotFound(format!("group {id}")))
    }

    fn create(&self, group: &Group) -> RepoResult<bool> {
        let inserted = self.conn.execute(
            "INSERT INTO groups (name) VALUES (?1);",
            [group.name.trim()],
        )?;
        Ok(inserted == 1)
    }

    fn update(&self, group: &Group) -> RepoResult<bool> {
        let Some(id) = group.id else {
            return Ok(false);
        };
        let changed = self.conn.execute(
            "UPDATE groups SET name = ?1 WHERE id = ?2;",
            params![group.name.trim(), id],
        )?;
        Ok(changed == 1)
    }

    fn delete(&self, id: EntityId) -> RepoResult<bool> {
        let changed = self.conn.execute("DELETE FROM groups WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound(format!("group {id}")));
        }
        Ok(true)
    }
}

impl GroupRepository for SqliteGroupRepository<'_> {
    fn lessons_by_id(&self, group_id: EntityId) -> RepoResult<u32> {
        if !self.exists(group_id)? {
            return Err(RepoError::NotFound(format!("group {group_id}")));
        }
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM lessons WHERE group_id = ?1;",
            [group_id],
            |row| row.get(0),
        )?;
        count_to_u32(count)
    }
}

fn parse_group_row(row: &Row<'_>) -> rusqlite::Result<Group> {
    Ok(Group {
        id: Some(row.get("id")?),
        name: row.get("name")?,
    })
}

pub(crate) fn count_to_u32(count: i64) -> RepoResult<u32> {
    u32::try_from(count)
        .map_err(|_| RepoError::InvalidData(format!("lesson count `{count}` out of range")))
}
