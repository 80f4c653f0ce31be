//! Password hashing (Argon2id, PHC string format).

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("failed to hash password")]
    Hash,

    #[error("stored password hash is malformed")]
    MalformedHash,
}

/// Hash a password with a fresh random salt.
///
/// Returns a PHC string (`$argon2id$...`) suitable for storage; the plain
/// password must never be persisted or logged.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| PasswordError::Hash)
}

/// Verify a password against a stored PHC string.
///
/// A mismatch is `Ok(false)`; only an undecodable stored hash is an error.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored).map_err(|_| PasswordError::MalformedHash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("pw123").unwrap();
        assert!(hash.starts_with("$argon2"));

        assert!(verify_password("pw123", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        let first = hash_password("pw123").unwrap();
        let second = hash_password("pw123").unwrap();

        // Random salts make hashes unique, but both must verify.
        assert_ne!(first, second);
        assert!(verify_password("pw123", &first).unwrap());
        assert!(verify_password("pw123", &second).unwrap());
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        assert_eq!(
            verify_password("pw123", "not-a-phc-string"),
            Err(PasswordError::MalformedHash)
        );
    }
}
