// Inbound HTTP adapters for the contact CRUD operations.
//
// Responsibilities
// - Decode request bodies and path ids, invoke one ContactStore operation on
//   whichever backend was injected, serialize the result.
// - Map the contract's closed error set to transport status codes. The stores
//   themselves carry no transport knowledge.
//
// Boundaries
// - Existence checking for updates happens here with a get_one, not inside the
//   stores: their update does not report a missing id.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::core::contact::Contact;
use crate::core::ports::StoreError;
use crate::shell::state::SharedContactStore;

struct ApiError(StoreError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            StoreError::NotFound => StatusCode::NOT_FOUND,
            StoreError::Conflict => StatusCode::CONFLICT,
            StoreError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        (status, self.0.to_string()).into_response()
    }
}

pub async fn list(State(store): State<SharedContactStore>) -> Response {
    match store.fetch_all().await {
        Ok(contacts) => Json(contacts).into_response(),
        Err(err) => ApiError(err).into_response(),
    }
}

pub async fn add(
    State(store): State<SharedContactStore>,
    body: Result<Json<Contact>, JsonRejection>,
) -> Response {
    let Json(contact) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match store.create(contact.clone()).await {
        Ok(()) => (StatusCode::CREATED, Json(contact)).into_response(),
        Err(err) => ApiError(err).into_response(),
    }
}

pub async fn get_one(
    State(store): State<SharedContactStore>,
    Path(id): Path<String>,
) -> Response {
    match store.get_one(&id).await {
        Ok(contact) => Json(contact).into_response(),
        Err(err) => ApiError(err).into_response(),
    }
}

pub async fn update(
    State(store): State<SharedContactStore>,
    Path(id): Path<String>,
    body: Result<Json<Contact>, JsonRejection>,
) -> Response {
    let Json(contact) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    // The stores do not report a missing id on update, so the check lives here.
    if let Err(err) = store.get_one(&id).await {
        return ApiError(err).into_response();
    }
    match store.update(&id, contact.clone()).await {
        Ok(()) => Json(contact).into_response(),
        Err(err) => ApiError(err).into_response(),
    }
}

pub async fn remove(
    State(store): State<SharedContactStore>,
    Path(id): Path<String>,
) -> Response {
    match store.delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => ApiError(err).into_response(),
    }
}

/// One router per injected backend; the shell nests it under the backend's
/// path prefix.
pub fn routes(store: SharedContactStore) -> Router {
    Router::new()
        .route("/", get(list).post(add))
        .route("/{id}", get(get_one).put(update).delete(remove))
        .with_state(store)
}
