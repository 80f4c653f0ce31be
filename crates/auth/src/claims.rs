//! Token claims model (transport-agnostic).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_core::UserId;

use crate::Principal;

/// The minimal set of claims expected once a token has been decoded and
/// its signature verified by the transport/security layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account's username.
    pub sub: String,

    /// Stable account identity.
    pub user_id: UserId,

    /// Whether the account carries unconditional access rights.
    pub staff: bool,

    /// Issued-at timestamp.
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl Claims {
    /// Claims for a token issued at `now`, valid for `ttl`.
    pub fn issued(
        sub: impl Into<String>,
        user_id: UserId,
        staff: bool,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            sub: sub.into(),
            user_id,
            staff,
            issued_at: now,
            expires_at: now + ttl,
        }
    }

    /// Project the claims into the principal they prove.
    pub fn to_principal(&self) -> Principal {
        if self.staff {
            Principal::staff(self.sub.clone())
        } else {
            Principal::regular(self.sub.clone())
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate the claim time window.
///
/// Note: this validates the *claims* only. Signature verification and
/// decoding are intentionally outside this function.
pub fn validate_claims(claims: &Claims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    if claims.expires_at <= claims.issued_at {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}
