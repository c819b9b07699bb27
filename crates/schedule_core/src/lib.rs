//! Core service layer for the schedule application.
//! Groups and lectors are validated, persisted and counted here; callers only
//! see `ServiceError` kinds, never storage errors directly.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::group::Group;
pub use model::lector::Lector;
pub use model::{Entity, EntityId};
pub use repo::group_repo::SqliteGroupRepository;
pub use repo::lector_repo::SqliteLectorRepository;
pub use repo::{GroupRepository, LectorRepository, RepoError, RepoResult, Repository};
pub use service::entity_service::EntityService;
pub use service::error::{ErrorKind, ServiceError, ServiceResult};
pub use service::group_service::GroupService;
pub use service::lector_service::LectorService;
pub use validation::{EntityValidator, Validate, ValidationError, ValidationRule, Validator};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
