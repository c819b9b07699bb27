//! Entity validation rules and the validator capability consumed by services.
//!
//! # Responsibility
//! - Declare field-level rules for `Group` and `Lector`.
//! - Expose a `Validator<T>` seam so services can be tested with any rule set.
//!
//! # Invariants
//! - Validation reports the first violated rule only.
//! - Rules operate on trimmed values; surrounding whitespace is never an error
//!   by itself.

use crate::model::group::Group;
use crate::model::lector::Lector;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Upper bound for every name-like field.
pub const MAX_NAME_CHARS: usize = 50;

const GROUP_NAME_PATTERN: &str = r"^[\p{L}\p{N}][\p{L}\p{N} _-]*$";
const PERSON_NAME_PATTERN: &str = r"^\p{L}[\p{L}' -]*$";

static GROUP_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(GROUP_NAME_PATTERN).expect("valid group name regex"));
static PERSON_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(PERSON_NAME_PATTERN).expect("valid person name regex"));

/// Rule a field value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    NotBlank,
    MaxLength(usize),
    Pattern(&'static str),
}

impl Display for ValidationRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotBlank => write!(f, "must not be blank"),
            Self::MaxLength(max) => write!(f, "must be at most {max} characters"),
            Self::Pattern(pattern) => write!(f, "must match `{pattern}`"),
        }
    }
}

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{field}` {rule}")]
pub struct ValidationError {
    pub field: &'static str,
    pub rule: ValidationRule,
}

impl ValidationError {
    pub fn new(field: &'static str, rule: ValidationRule) -> Self {
        Self { field, rule }
    }
}

/// Capability that accepts or rejects an entity before it is written.
pub trait Validator<T> {
    fn validate(&self, entity: &T) -> Result<(), ValidationError>;
}

/// Entity-owned validation rules.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Default validator delegating to each entity's own `Validate` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityValidator;

impl<T: Validate> Validator<T> for EntityValidator {
    fn validate(&self, entity: &T) -> Result<(), ValidationError> {
        entity.validate()
    }
}

impl<T, V: Validator<T> + ?Sized> Validator<T> for &V {
    fn validate(&self, entity: &T) -> Result<(), ValidationError> {
        (**self).validate(entity)
    }
}

impl Validate for Group {
    fn validate(&self) -> Result<(), ValidationError> {
        check_name("name", &self.name, &GROUP_NAME_RE, GROUP_NAME_PATTERN)
    }
}

impl Validate for Lector {
    fn validate(&self) -> Result<(), ValidationError> {
        check_name(
            "first_name",
            &self.first_name,
            &PERSON_NAME_RE,
            PERSON_NAME_PATTERN,
        )?;
        check_name(
            "last_name",
            &self.last_name,
            &PERSON_NAME_RE,
            PERSON_NAME_PATTERN,
        )
    }
}

fn check_name(
    field: &'static str,
    value: &str,
    re: &Regex,
    pattern: &'static str,
) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, ValidationRule::NotBlank));
    }
    if trimmed.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::new(
            field,
            ValidationRule::MaxLength(MAX_NAME_CHARS),
        ));
    }
    if !re.is_match(trimmed) {
        return Err(ValidationError::new(field, ValidationRule::Pattern(pattern)));
    }
    Ok(())
}
