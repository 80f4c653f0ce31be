use serde::{Deserialize, Serialize};

use stockroom_core::Violation;

/// Inventory item identifier.
///
/// Assigned by the item store at creation time and immutable afterwards.
/// Plain integer on the wire (`{"id": 1, ...}`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A stored inventory item.
///
/// # Invariants
/// - `id` is unique and never changes after creation.
/// - `quantity` is never negative; a draft must pass [`ItemDraft::validate`]
///   before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub quantity: i64,
}

impl Item {
    pub fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            quantity: draft.quantity,
        }
    }

    /// The draft that a partial update would produce, with absent fields
    /// carried over from the stored record. The result still has to pass
    /// validation before being persisted.
    pub fn merged(&self, patch: ItemPatch) -> ItemDraft {
        ItemDraft {
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            description: patch.description.unwrap_or_else(|| self.description.clone()),
            quantity: patch.quantity.unwrap_or(self.quantity),
        }
    }
}

/// Proposed field values for a create or full-replace operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub quantity: i64,
}

impl ItemDraft {
    /// Validate field constraints, returning the accepted fields.
    ///
    /// Runs strictly before any persistence mutation; a draft that fails
    /// here must leave storage untouched. Name and description are opaque
    /// strings with no format constraints.
    pub fn validate(self) -> Result<Self, Vec<Violation>> {
        let mut violations = Vec::new();

        if self.quantity < 0 {
            violations.push(Violation::new(
                "quantity",
                "must be a non-negative integer",
            ));
        }

        if violations.is_empty() {
            Ok(self)
        } else {
            Err(violations)
        }
    }
}

/// Partial update payload: absent fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
}
