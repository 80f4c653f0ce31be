use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use stockroom_auth::{Operation, Principal};
use stockroom_core::DomainError;
use stockroom_inventory::ItemId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/:id",
            get(get_item)
                .put(update_item)
                .patch(patch_item)
                .delete(delete_item),
        )
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
) -> axum::response::Response {
    if let Err(denied) = authz::require(&principal, Operation::Read) {
        return denied;
    }

    (StatusCode::OK, Json(services.items.list())).into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    if let Err(denied) = authz::require(&principal, Operation::Read) {
        return denied;
    }

    match services.items.get(ItemId::new(id)) {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => errors::domain_error_to_response(DomainError::NotFound),
    }
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<dto::ItemPayload>,
) -> axum::response::Response {
    if let Err(denied) = authz::require(&principal, Operation::Write) {
        return denied;
    }

    let draft = match body.into_draft().validate() {
        Ok(d) => d,
        Err(violations) => {
            return errors::domain_error_to_response(DomainError::Validation(violations));
        }
    };

    let item = services.items.insert(draft);
    tracing::info!(id = %item.id, "item created");

    (StatusCode::CREATED, Json(item)).into_response()
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
    Json(body): Json<dto::ItemPayload>,
) -> axum::response::Response {
    if let Err(denied) = authz::require(&principal, Operation::Write) {
        return denied;
    }

    let id = ItemId::new(id);
    if services.items.get(id).is_none() {
        return errors::domain_error_to_response(DomainError::NotFound);
    }

    let draft = match body.into_draft().validate() {
        Ok(d) => d,
        Err(violations) => {
            return errors::domain_error_to_response(DomainError::Validation(violations));
        }
    };

    match services.items.replace(id, draft) {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => errors::domain_error_to_response(DomainError::NotFound),
    }
}

pub async fn patch_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
    Json(body): Json<dto::ItemPatchPayload>,
) -> axum::response::Response {
    if let Err(denied) = authz::require(&principal, Operation::Write) {
        return denied;
    }

    let id = ItemId::new(id);
    let Some(current) = services.items.get(id) else {
        return errors::domain_error_to_response(DomainError::NotFound);
    };

    let draft = match current.merged(body.into_patch()).validate() {
        Ok(d) => d,
        Err(violations) => {
            return errors::domain_error_to_response(DomainError::Validation(violations));
        }
    };

    match services.items.replace(id, draft) {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => errors::domain_error_to_response(DomainError::NotFound),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    if let Err(denied) = authz::require(&principal, Operation::Write) {
        return denied;
    }

    if services.items.remove(ItemId::new(id)) {
        tracing::info!(%id, "item deleted");
        StatusCode::NO_CONTENT.into_response()
    } else {
        errors::domain_error_to_response(DomainError::NotFound)
    }
}
