use axum::{
    Router,
    routing::{get, post},
};

pub mod items;
pub mod system;
pub mod users;

/// Router for all endpoints.
///
/// Authorization is per-route (the auth middleware only resolves the
/// principal), so public and protected routes live in one table.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/whoami", get(system::whoami))
        .route("/register", post(users::register))
        .route("/token", post(users::token))
        .merge(items::router())
}
