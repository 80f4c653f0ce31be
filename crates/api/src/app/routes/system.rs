use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use stockroom_auth::Principal;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Report the resolved principal; handy for debugging credential setup.
pub async fn whoami(Extension(principal): Extension<Principal>) -> impl IntoResponse {
    Json(serde_json::json!({
        "kind": principal.kind(),
        "username": principal.username(),
    }))
}
