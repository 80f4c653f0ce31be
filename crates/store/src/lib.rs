//! `stockroom-store` — the persistence seam.
//!
//! Storage is an external collaborator as far as the domain is concerned:
//! handlers talk to the [`ItemStore`]/[`UserStore`] traits, and this crate
//! ships in-memory implementations with per-record atomicity. A
//! database-backed implementation would slot in behind the same traits.

pub mod items;
pub mod users;

pub use items::{InMemoryItemStore, ItemStore};
pub use users::{InMemoryUserStore, UserRecord, UserStore, UserStoreError};
