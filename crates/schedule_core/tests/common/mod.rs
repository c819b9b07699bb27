#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use schedule_core::{
    Entity, EntityId, Group, GroupRepository, Lector, LectorRepository, RepoError, RepoResult,
    Repository, ValidationError, ValidationRule, Validator,
};
use std::cell::{Cell, RefCell};

/// Scripted behavior of one fake repository operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Behave like an in-memory store.
    Ok,
    NotFound,
    Fail,
}

/// Recording repository: answers from `stored`, unless an operation is
/// scripted to fail, and remembers every call it receives.
pub struct FakeRepository<T> {
    pub stored: Vec<T>,
    pub get_all: Outcome,
    pub get_by_id: Outcome,
    pub create: Outcome,
    pub update: Outcome,
    pub delete: Outcome,
    pub lessons: Outcome,
    pub write_result: bool,
    pub lesson_count: u32,
    pub last_interval: Cell<Option<(NaiveDateTime, NaiveDateTime)>>,
    calls: RefCell<Vec<&'static str>>,
}

impl<T> FakeRepository<T> {
    pub fn with(stored: Vec<T>) -> Self {
        Self {
            stored,
            get_all: Outcome::Ok,
            get_by_id: Outcome::Ok,
            create: Outcome::Ok,
            update: Outcome::Ok,
            delete: Outcome::Ok,
            lessons: Outcome::Ok,
            write_result: true,
            lesson_count: 0,
            last_interval: Cell::new(None),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::with(Vec::new())
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.calls.borrow().iter().filter(|call| **call == operation).count()
    }

    fn record(&self, operation: &'static str) {
        self.calls.borrow_mut().push(operation);
    }
}

pub fn access_failure() -> RepoError {
    RepoError::InvalidData("storage unavailable".to_string())
}

fn scripted(outcome: Outcome, what: &str) -> RepoResult<()> {
    match outcome {
        Outcome::Ok => Ok(()),
        Outcome::NotFound => Err(RepoError::NotFound(what.to_string())),
        Outcome::Fail => Err(access_failure()),
    }
}

impl<T: Entity + Clone> Repository<T> for FakeRepository<T> {
    fn get_all(&self) -> RepoResult<Vec<T>> {
        self.record("get_all");
        scripted(self.get_all, "all")?;
        if self.stored.is_empty() {
            return Err(RepoError::NotFound("all".to_string()));
        }
        Ok(self.stored.clone())
    }

    fn get_by_id(&self, id: EntityId) -> RepoResult<T> {
        self.record("get_by_id");
        scripted(self.get_by_id, "by id")?;
        self.stored
            .iter()
            .find(|entity| entity.id() == Some(id))
            .cloned()
            .ok_or_else(|| RepoError::NotFound(format!("id {id}")))
    }

    fn create(&self, _entity: &T) -> RepoResult<bool> {
        self.record("create");
        scripted(self.create, "create")?;
        Ok(self.write_result)
    }

    fn update(&self, _entity: &T) -> RepoResult<bool> {
        self.record("update");
        scripted(self.update, "update")?;
        Ok(self.write_result)
    }

    fn delete(&self, _id: EntityId) -> RepoResult<bool> {
        self.record("delete");
        scripted(self.delete, "delete")?;
        Ok(self.write_result)
    }
}

impl GroupRepository for FakeRepository<Group> {
    fn lessons_by_id(&self, _group_id: EntityId) -> RepoResult<u32> {
        self.record("lessons_by_id");
        scripted(self.lessons, "lessons")?;
        Ok(self.lesson_count)
    }
}

impl LectorRepository for FakeRepository<Lector> {
    fn lessons_by_time(&self, start: NaiveDateTime, end: NaiveDateTime) -> RepoResult<u32> {
        self.record("lessons_by_time");
        self.last_interval.set(Some((start, end)));
        scripted(self.lessons, "lessons")?;
        Ok(self.lesson_count)
    }
}

/// Validator rejecting every entity, counting how often it ran.
#[derive(Default)]
pub struct RejectingValidator {
    pub calls: Cell<usize>,
}

impl<T> Validator<T> for RejectingValidator {
    fn validate(&self, _entity: &T) -> Result<(), ValidationError> {
        self.calls.set(self.calls.get() + 1);
        Err(ValidationError::new("name", ValidationRule::NotBlank))
    }
}

pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 9, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .expect("valid test timestamp")
}
