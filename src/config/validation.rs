//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Enforce the store invariant: user ids unique and non-empty
//! - Check the start path and log level are usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use crate::config::schema::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two user entries share an id.
    DuplicateUserId(String),
    /// A user entry has an empty id.
    EmptyUserId { index: usize },
    /// A user entry has an empty display name.
    EmptyFullName { id: String },
    /// The start path must be absolute.
    RelativeStartPath(String),
    /// The log level is not one of the known levels.
    UnknownLogLevel(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::DuplicateUserId(id) => write!(f, "duplicate user id '{}'", id),
            ValidationError::EmptyUserId { index } => {
                write!(f, "user entry {} has an empty id", index)
            }
            ValidationError::EmptyFullName { id } => {
                write!(f, "user '{}' has an empty full name", id)
            }
            ValidationError::RelativeStartPath(path) => {
                write!(f, "start path '{}' is not absolute", path)
            }
            ValidationError::UnknownLogLevel(level) => {
                write!(f, "unknown log level '{}'", level)
            }
        }
    }
}

/// Validate semantic invariants, collecting every violation.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for (index, user) in config.users.iter().enumerate() {
        if user.id.is_empty() {
            errors.push(ValidationError::EmptyUserId { index });
        } else if !seen.insert(user.id.as_str()) {
            errors.push(ValidationError::DuplicateUserId(user.id.clone()));
        }
        if user.full_name.trim().is_empty() {
            errors.push(ValidationError::EmptyFullName {
                id: user.id.clone(),
            });
        }
    }

    if !config.start_path.starts_with('/') {
        errors.push(ValidationError::RelativeStartPath(config.start_path.clone()));
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
