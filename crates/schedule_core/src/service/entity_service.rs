//! Generic CRUD service shared by every entity family.
//!
//! # Responsibility
//! - Enforce id preconditions, validation and the update existence check.
//! - Delegate to the repository and translate its failures.
//!
//! # Invariants
//! - Precondition and validation failures happen before any repository call.
//! - `update` reads the entity by id before writing; a missing entity is
//!   never written.
//! - Successful repository results are returned unchanged.
//! - The check-then-write in `update` is two repository calls, not one
//!   atomic operation.

use crate::model::{Entity, EntityId};
use crate::repo::Repository;
use crate::service::error::{
    failure, not_found_or_failure, require_id, ServiceError, ServiceResult,
};
use crate::validation::{EntityValidator, Validator};
use log::{debug, warn};
use std::marker::PhantomData;

/// Stateless service over one entity family.
///
/// Holds only the injected repository and validator; safe to share across
/// threads whenever both of them are.
pub struct EntityService<T, R, V = EntityValidator> {
    repo: R,
    validator: V,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R> EntityService<T, R, EntityValidator>
where
    T: Entity,
    R: Repository<T>,
    EntityValidator: Validator<T>,
{
    /// Creates a service using the entity's built-in validation rules.
    pub fn with_default_validator(repo: R) -> Self {
        Self::new(repo, EntityValidator)
    }
}

impl<T, R, V> EntityService<T, R, V>
where
    T: Entity,
    R: Repository<T>,
    V: Validator<T>,
{
    pub fn new(repo: R, validator: V) -> Self {
        Self {
            repo,
            validator,
            _entity: PhantomData,
        }
    }

    /// Underlying repository, for entity-specific extensions.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Lists every stored entity.
    ///
    /// # Errors
    /// - `NoSuchEntity` when the repository holds none.
    /// - `Failure` on any other repository failure.
    pub fn get_all(&self) -> ServiceResult<Vec<T>> {
        debug!("event=get_all module=service status=start entity={}", T::KIND);
        self.repo.get_all().map_err(|err| {
            not_found_or_failure::<T>("get_all", err, || format!("no {}s exist", T::KIND))
        })
    }

    /// Validates and stores a new entity, returning the repository's flag.
    pub fn create(&self, entity: &T) -> ServiceResult<bool> {
        debug!("event=create module=service status=start entity={}", T::KIND);
        self.check("create", entity)?;
        self.repo
            .create(entity)
            .map_err(|err| failure::<T>("create", err))
    }

    /// Deletes an entity by id.
    ///
    /// # Errors
    /// - `MissingIdentifier` when `id` is zero; the repository is not called.
    /// - `NoSuchEntity` when the repository reports no such row.
    pub fn delete(&self, id: EntityId) -> ServiceResult<bool> {
        debug!(
            "event=delete module=service status=start entity={} id={}",
            T::KIND,
            id
        );
        let id = require_id::<T>("delete", Some(id))?;
        self.repo
            .delete(id)
            .map_err(|err| not_found_or_failure::<T>("delete", err, || missing_message::<T>(id)))
    }

    /// Reads one entity by id.
    pub fn get_by_id(&self, id: EntityId) -> ServiceResult<T> {
        debug!(
            "event=get_by_id module=service status=start entity={} id={}",
            T::KIND,
            id
        );
        let id = require_id::<T>("get_by_id", Some(id))?;
        self.repo.get_by_id(id).map_err(|err| {
            not_found_or_failure::<T>("get_by_id", err, || missing_message::<T>(id))
        })
    }

    /// Replaces a stored entity after confirming that it exists.
    ///
    /// # Errors
    /// - `MissingIdentifier` when the entity has no persisted id.
    /// - `Validation` when the validator rejects the entity.
    /// - `NoSuchEntity` when the existence check finds no row; no write is
    ///   attempted.
    /// - `Failure` when either the existence check or the write fails
    ///   otherwise.
    pub fn update(&self, entity: &T) -> ServiceResult<bool> {
        debug!(
            "event=update module=service status=start entity={} id={:?}",
            T::KIND,
            entity.id()
        );
        let id = require_id::<T>("update", entity.id())?;
        self.check("update", entity)?;

        if let Err(err) = self.repo.get_by_id(id) {
            return Err(not_found_or_failure::<T>("update_check", err, || {
                missing_message::<T>(id)
            }));
        }

        self.repo
            .update(entity)
            .map_err(|err| failure::<T>("update", err))
    }

    fn check(&self, operation: &'static str, entity: &T) -> ServiceResult<()> {
        self.validator.validate(entity).map_err(|source| {
            warn!(
                "event={} module=service status=rejected entity={} id={:?} reason=validation field={}",
                operation,
                T::KIND,
                entity.id(),
                source.field
            );
            ServiceError::Validation {
                entity: T::KIND,
                source,
            }
        })
    }
}

fn missing_message<T: Entity>(id: EntityId) -> String {
    format!("{} {} does not exist", T::KIND, id)
}
