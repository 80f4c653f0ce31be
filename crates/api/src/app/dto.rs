use serde::{Deserialize, Serialize};

use stockroom_inventory::{ItemDraft, ItemPatch};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /items` and `PUT /items/:id` (full field set).
#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub description: String,
    pub quantity: i64,
}

impl ItemPayload {
    pub fn into_draft(self) -> ItemDraft {
        ItemDraft {
            name: self.name,
            description: self.description,
            quantity: self.quantity,
        }
    }
}

/// Body of `PATCH /items/:id`; absent fields keep their stored values.
#[derive(Debug, Default, Deserialize)]
pub struct ItemPatchPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
}

impl ItemPatchPayload {
    pub fn into_patch(self) -> ItemPatch {
        ItemPatch {
            name: self.name,
            description: self.description,
            quantity: self.quantity,
        }
    }
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// Manual Debug: the plain password must never reach a log line.
impl core::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

impl core::fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TokenRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// -------------------------
// Response DTOs
// -------------------------

/// Registration echo: never includes the password.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access: String,
}
