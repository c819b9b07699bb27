//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate precondition checks, validation and repository calls.
//! - Translate repository failures into the caller-facing `ServiceError`.
//! - Keep callers decoupled from storage details.

pub mod entity_service;
pub mod error;
pub mod group_service;
pub mod lector_service;
