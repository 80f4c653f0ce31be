//! HS256 bearer token issue/verify.
//!
//! Signature handling is delegated to `jsonwebtoken`; the time-window
//! check is left to [`validate_claims`] so it stays deterministic under an
//! injected clock rather than depending on the library's wall-clock
//! validation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_core::UserId;

use crate::claims::{Claims, TokenValidationError, validate_claims};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Malformed token, bad signature, or undecodable claims.
    #[error("invalid token")]
    Invalid,

    /// Signature was fine but the claim window is not currently valid.
    #[error(transparent)]
    Claims(#[from] TokenValidationError),

    /// Token could not be signed (key/serialization failure).
    #[error("failed to sign token")]
    Signing,
}

/// Verification side of the credential issuer.
///
/// The transport layer consumes this as a trait object so tests can swap
/// in alternative verifiers without touching middleware.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError>;
}

/// JSON wire form of [`Claims`] (registered claim names, epoch seconds).
#[derive(Debug, Serialize, Deserialize)]
struct WireClaims {
    sub: String,
    user_id: UserId,
    staff: bool,
    iat: i64,
    exp: i64,
}

/// Symmetric HS256 issuer/verifier.
pub struct Hs256Tokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Hs256Tokens {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Window checks happen in `validate_claims` with an explicit clock.
        validation.validate_exp = false;
        let no_required: &[&str] = &[];
        validation.set_required_spec_claims(no_required);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign `claims` into a compact token string.
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        let wire = WireClaims {
            sub: claims.sub.clone(),
            user_id: claims.user_id,
            staff: claims.staff,
            iat: claims.issued_at.timestamp(),
            exp: claims.expires_at.timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &wire, &self.encoding)
            .map_err(|_| TokenError::Signing)
    }
}

impl TokenVerifier for Hs256Tokens {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let data = decode::<WireClaims>(token, &self.decoding, &self.validation)
            .map_err(|_| TokenError::Invalid)?;
        let wire = data.claims;

        let issued_at = DateTime::from_timestamp(wire.iat, 0).ok_or(TokenError::Invalid)?;
        let expires_at = DateTime::from_timestamp(wire.exp, 0).ok_or(TokenError::Invalid)?;

        let claims = Claims {
            sub: wire.sub,
            user_id: wire.user_id,
            staff: wire.staff,
            issued_at,
            expires_at,
        };
        validate_claims(&claims, now)?;
        Ok(claims)
    }
}
