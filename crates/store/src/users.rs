use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

use stockroom_core::UserId;

/// A stored user account.
///
/// `password_hash` is a PHC string; the plain password never reaches this
/// type. Staff accounts are created by administrative processes (or the
/// bootstrap path), never through public registration.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_staff: bool,
}

// Manual Debug: the credential hash stays out of logs and panic messages.
impl core::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("is_staff", &self.is_staff)
            .finish()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("username already exists")]
    UsernameTaken,
}

/// User persistence contract.
///
/// Username uniqueness is the store's invariant: it is enforced at insert
/// time, under the same lock that performs the write.
pub trait UserStore: Send + Sync {
    fn insert(&self, user: UserRecord) -> Result<(), UserStoreError>;
    fn get(&self, username: &str) -> Option<UserRecord>;
    fn count(&self) -> usize;
}

/// In-memory user store for dev/test.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: Mutex<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&self, user: UserRecord) -> Result<(), UserStoreError> {
        let mut map = self.inner.lock().unwrap();
        if map.contains_key(&user.username) {
            return Err(UserStoreError::UsernameTaken);
        }
        map.insert(user.username.clone(), user);
        Ok(())
    }

    fn get(&self, username: &str) -> Option<UserRecord> {
        self.inner.lock().unwrap().get(username).cloned()
    }

    fn count(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}
