//! Service wiring shared by all handlers.

use std::sync::Arc;

use stockroom_auth::Hs256Tokens;
use stockroom_store::{InMemoryItemStore, InMemoryUserStore, ItemStore, UserStore};

/// Everything a handler needs, bundled behind one `Extension`.
///
/// Stores are trait objects so a persistent implementation can replace the
/// in-memory ones without touching handlers.
pub struct AppServices {
    pub items: Arc<dyn ItemStore>,
    pub users: Arc<dyn UserStore>,
    pub tokens: Arc<Hs256Tokens>,
}

/// In-memory wiring (dev/test): empty stores + an HS256 issuer/verifier.
pub fn build_services(jwt_secret: &str) -> AppServices {
    AppServices {
        items: Arc::new(InMemoryItemStore::new()),
        users: Arc::new(InMemoryUserStore::new()),
        tokens: Arc::new(Hs256Tokens::new(jwt_secret.as_bytes())),
    }
}
