//! API-side authorization guard.
//!
//! Enforces the access decision at the route boundary (before any handler
//! work), keeping the policy itself pure and HTTP-free in
//! `stockroom-auth`.

use axum::response::Response;

use stockroom_auth::{Decision, Operation, Principal, decide};
use stockroom_core::DomainError;

use crate::app::errors;

/// Require `operation` to be allowed for `principal`.
///
/// A `Deny` becomes the 403 response; it carries no detail beyond the
/// status signal.
pub fn require(principal: &Principal, operation: Operation) -> Result<(), Response> {
    match decide(principal, operation) {
        Decision::Allow => Ok(()),
        Decision::Deny => Err(errors::domain_error_to_response(DomainError::Forbidden)),
    }
}
