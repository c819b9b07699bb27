//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define the persistence contracts consumed by services.
//! - Isolate SQL details from service orchestration.
//!
//! # Invariants
//! - `RepoError::NotFound` is the only "does not exist" signal. Every other
//!   variant is an access failure.
//! - Implementations must be safe for whatever concurrency the caller uses;
//!   services add no locking of their own.

use crate::db::DbError;
use crate::model::group::Group;
use crate::model::lector::Lector;
use crate::model::EntityId;
use chrono::NaiveDateTime;
use thiserror::Error;

pub mod group_repo;
pub mod lector_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence failure reported by a repository.
#[derive(Debug, Error)]
pub enum RepoError {
    /// Requested rows do not exist.
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Db(#[from] DbError),
    /// Persisted row could not be decoded into a domain value.
    #[error("invalid persisted data: {0}")]
    InvalidData(String),
}

impl RepoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// CRUD contract shared by every entity family.
pub trait Repository<T> {
    /// Returns every stored entity; `NotFound` when there are none.
    fn get_all(&self) -> RepoResult<Vec<T>>;
    fn get_by_id(&self, id: EntityId) -> RepoResult<T>;
    fn create(&self, entity: &T) -> RepoResult<bool>;
    /// Replaces the stored entity identified by `entity`'s id.
    fn update(&self, entity: &T) -> RepoResult<bool>;
    fn delete(&self, id: EntityId) -> RepoResult<bool>;
}

/// Group persistence with the per-group lesson aggregate.
pub trait GroupRepository: Repository<Group> {
    fn lessons_by_id(&self, group_id: EntityId) -> RepoResult<u32>;
}

/// Lector persistence with the time-window lesson aggregate.
pub trait LectorRepository: Repository<Lector> {
    /// Counts lessons starting in the half-open interval `[start, end)`.
    fn lessons_by_time(&self, start: NaiveDateTime, end: NaiveDateTime) -> RepoResult<u32>;
}

// Forwarding impls let a service borrow a repository the caller keeps owning.
impl<T, R: Repository<T> + ?Sized> Repository<T> for &R {
    fn get_all(&self) -> RepoResult<Vec<T>> {
        (**self).get_all()
    }

    fn get_by_id(&self, id: EntityId) -> RepoResult<T> {
        (**self).get_by_id(id)
    }

    fn create(&self, entity: &T) -> RepoResult<bool> {
        (**self).create(entity)
    }

    fn update(&self, entity: &T) -> RepoResult<bool> {
        (**self).update(entity)
    }

    fn delete(&self, id: EntityId) -> RepoResult<bool> {
        (**self).delete(id)
    }
}

impl<R: GroupRepository + ?Sized> GroupRepository for &R {
    fn lessons_by_id(&self, group_id: EntityId) -> RepoResult<u32> {
        (**self).lessons_by_id(group_id)
    }
}

impl<R: LectorRepository + ?Sized> LectorRepository for &R {
    fn lessons_by_time(&self, start: NaiveDateTime, end: NaiveDateTime) -> RepoResult<u32> {
        (**self).lessons_by_time(start, end)
    }
}
