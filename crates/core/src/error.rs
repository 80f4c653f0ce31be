//! Domain error model.

use serde::Serialize;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A single field-level validation failure.
///
/// Violations are surfaced verbatim to the caller so a client can correct
/// its input; keep `reason` human-readable and free of internal detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub reason: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl core::fmt::Display for Violation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// conflicts, missing records). Every rejected operation maps to exactly
/// one of these kinds; none are retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more fields failed validation.
    #[error("validation failed: {}", format_violations(.0))]
    Validation(Vec<Violation>),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,

    /// A uniqueness conflict occurred (e.g. duplicate username).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The presented credential was missing, malformed, or expired.
    #[error("unauthorized")]
    Unauthorized,

    /// The principal lacks rights for the operation.
    #[error("forbidden")]
    Forbidden,
}

impl DomainError {
    pub fn validation(violations: Vec<Violation>) -> Self {
        Self::Validation(violations)
    }

    pub fn single_violation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation(vec![Violation::new(field, reason)])
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
