use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use chrono::{Duration, Utc};

use stockroom_auth::{Claims, hash_password, verify_password};
use stockroom_core::{DomainError, UserId, Violation};
use stockroom_store::{UserRecord, UserStoreError};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Access token lifetime.
const TOKEN_TTL_SECS: i64 = 3600;

/// `POST /register` — open to anyone; always creates a non-staff account.
pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterRequest>,
) -> axum::response::Response {
    let mut violations = Vec::new();
    if body.username.trim().is_empty() {
        violations.push(Violation::new("username", "must not be empty"));
    }
    if body.password.is_empty() {
        violations.push(Violation::new("password", "must not be empty"));
    }
    if !violations.is_empty() {
        return errors::domain_error_to_response(DomainError::Validation(violations));
    }

    let password_hash = match hash_password(&body.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!(error = %e, "password hashing failed");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "registration failed",
            );
        }
    };

    let record = UserRecord {
        id: UserId::new(),
        username: body.username.clone(),
        email: body.email.clone(),
        password_hash,
        is_staff: false,
    };

    match services.users.insert(record) {
        Ok(()) => {
            tracing::info!(username = %body.username, "user registered");
            (
                StatusCode::CREATED,
                Json(dto::RegisterResponse {
                    username: body.username,
                    email: body.email,
                }),
            )
                .into_response()
        }
        Err(UserStoreError::UsernameTaken) => {
            errors::domain_error_to_response(DomainError::conflict("username already exists"))
        }
    }
}

/// `POST /token` — exchange username/password for a bearer token.
///
/// The failure response is identical for an unknown username and a wrong
/// password, so the endpoint does not confirm account existence.
pub async fn token(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::TokenRequest>,
) -> axum::response::Response {
    let denied = || {
        errors::json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "invalid username or password",
        )
    };

    let Some(user) = services.users.get(&body.username) else {
        return denied();
    };

    match verify_password(&body.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => return denied(),
        Err(e) => {
            tracing::error!(username = %user.username, error = %e, "stored credential unreadable");
            return denied();
        }
    }

    let claims = Claims::issued(
        user.username.clone(),
        user.id,
        user.is_staff,
        Utc::now(),
        Duration::seconds(TOKEN_TTL_SECS),
    );

    match services.tokens.issue(&claims) {
        Ok(access) => (StatusCode::OK, Json(dto::TokenResponse { access })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "token signing failed");
            errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "failed to issue token",
            )
        }
    }
}
