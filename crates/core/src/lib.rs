//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no HTTP or storage
//! concerns): the error model shared by every layer and strongly-typed
//! identifiers.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult, Violation};
pub use id::UserId;
