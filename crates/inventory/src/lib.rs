//! `stockroom-inventory` — the Item domain model and its validator.

pub mod item;

pub use item::{Item, ItemDraft, ItemId, ItemPatch};
