//! `stockroom-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it knows
//! nothing about requests or user records, only about resolved principals,
//! token claims, and credential material.

pub mod authorize;
pub mod claims;
pub mod password;
pub mod principal;
pub mod token;

pub use authorize::{Decision, Operation, decide};
pub use claims::{Claims, TokenValidationError, validate_claims};
pub use password::{PasswordError, hash_password, verify_password};
pub use principal::Principal;
pub use token::{Hs256Tokens, TokenError, TokenVerifier};
