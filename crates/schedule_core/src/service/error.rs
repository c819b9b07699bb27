//! Caller-facing error taxonomy for entity services.
//!
//! # Invariants
//! - Every repository failure maps to exactly one of `NoSuchEntity` (the
//!   repository reported not-found) or `Failure` (anything else).
//! - `Failure` always carries the original `RepoError` as its source.

use crate::model::{persisted_id, Entity, EntityId};
use crate::repo::RepoError;
use crate::validation::ValidationError;
use log::{error, warn};
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Stable discriminator for `ServiceError`, suitable for mapping onto
/// transport-level status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingIdentifier,
    ValidationFailure,
    NoSuchEntity,
    ServiceFailure,
}

impl ErrorKind {
    /// Whether the caller can fix the request and retry.
    pub fn is_recoverable(self) -> bool {
        !matches!(self, Self::ServiceFailure)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingIdentifier => "missing_identifier",
            Self::ValidationFailure => "validation_failure",
            Self::NoSuchEntity => "no_such_entity",
            Self::ServiceFailure => "service_failure",
        }
    }
}

/// Error returned by every service operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Id was zero or absent where a persisted id is required.
    #[error("missing id for {entity}")]
    MissingIdentifier { entity: &'static str },
    /// Entity rejected by the validator.
    #[error("invalid {entity}: {source}")]
    Validation {
        entity: &'static str,
        #[source]
        source: ValidationError,
    },
    /// Repository reported that the requested rows do not exist.
    #[error("{0}")]
    NoSuchEntity(String),
    /// Unexpected repository failure.
    #[error("{message}")]
    Failure {
        message: String,
        #[source]
        source: RepoError,
    },
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingIdentifier { .. } => ErrorKind::MissingIdentifier,
            Self::Validation { .. } => ErrorKind::ValidationFailure,
            Self::NoSuchEntity(_) => ErrorKind::NoSuchEntity,
            Self::Failure { .. } => ErrorKind::ServiceFailure,
        }
    }

    /// Original repository failure, when this error wraps one.
    pub fn repo_cause(&self) -> Option<&RepoError> {
        match self {
            Self::Failure { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Rejects zero/absent ids before any repository call.
pub(crate) fn require_id<T: Entity>(
    operation: &'static str,
    id: Option<EntityId>,
) -> ServiceResult<EntityId> {
    persisted_id(id).ok_or_else(|| {
        warn!(
            "event={} module=service status=rejected entity={} reason=missing_id",
            operation,
            T::KIND
        );
        ServiceError::MissingIdentifier { entity: T::KIND }
    })
}

/// Splits a repository failure into `NoSuchEntity` or `Failure`.
///
/// `missing` builds the caller-facing message and only runs on not-found.
pub(crate) fn not_found_or_failure<T: Entity>(
    operation: &'static str,
    err: RepoError,
    missing: impl FnOnce() -> String,
) -> ServiceError {
    if !err.is_not_found() {
        return failure::<T>(operation, err);
    }
    warn!(
        "event={} module=service status=not_found entity={} detail={}",
        operation,
        T::KIND,
        err
    );
    ServiceError::NoSuchEntity(missing())
}

/// Wraps an unexpected repository failure, keeping it as the source.
pub(crate) fn failure<T: Entity>(operation: &'static str, err: RepoError) -> ServiceError {
    error!(
        "event={} module=service status=error entity={} error={}",
        operation,
        T::KIND,
        err
    );
    ServiceError::Failure {
        message: format!("{} {} failed", T::KIND, operation),
        source: err,
    }
}
