use std::sync::Arc;

use anyhow::Context;

use stockroom_api::app::{self, services};
use stockroom_core::UserId;
use stockroom_store::UserRecord;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set; using insecure dev default");
        "dev-secret".to_string()
    });
    let addr = std::env::var("STOCKROOM_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let services = Arc::new(services::build_services(&jwt_secret));
    bootstrap_staff(&services);

    let app = app::build_app_with(services);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Seed one staff account from the environment.
///
/// Public registration only produces regular accounts; staff accounts come
/// from an administrative process, and for the in-memory store that
/// process is `STOCKROOM_ADMIN_USER` / `STOCKROOM_ADMIN_PASSWORD` at boot.
fn bootstrap_staff(services: &services::AppServices) {
    let (Ok(username), Ok(password)) = (
        std::env::var("STOCKROOM_ADMIN_USER"),
        std::env::var("STOCKROOM_ADMIN_PASSWORD"),
    ) else {
        return;
    };

    let password_hash = match stockroom_auth::hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!(error = %e, "failed to hash admin password; staff bootstrap skipped");
            return;
        }
    };

    let record = UserRecord {
        id: UserId::new(),
        username: username.clone(),
        email: String::new(),
        password_hash,
        is_staff: true,
    };

    match services.users.insert(record) {
        Ok(()) => tracing::info!(%username, "staff account bootstrapped"),
        Err(e) => tracing::warn!(%username, error = %e, "staff bootstrap skipped"),
    }
}
