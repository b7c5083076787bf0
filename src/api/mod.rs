//! HTTP API over the deck engine.
//!
//! A thin translation layer: each handler parses its inputs, calls into
//! the core, and maps the result to JSON. Every core failure becomes a
//! client-visible `{"error": …}` body; none is swallowed.

mod create;
mod draw;
mod open;

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde_json::json;
use uuid::Uuid;

use crate::error::{DrawError, NewDeckError, StoreError};
use crate::store::Store;

pub use create::CreateDeckResponse;
pub use draw::DrawCardsResponse;
pub use open::OpenDeckResponse;

/// Builds the API router over the given store.
///
/// The store is injected rather than global, so its lifetime is tied to
/// the server that owns it.
#[must_use]
pub fn router(store: Arc<Store>) -> Router {
    Router::new()
        .route("/deck/new", post(create::create_deck))
        .route("/deck/{deck_id}", get(open::open_deck))
        .route("/deck/{deck_id}/draw", get(draw::draw_cards))
        .with_state(store)
}

/// A client-visible API error: a status code and a JSON error message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<NewDeckError> for ApiError {
    fn from(err: NewDeckError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<DrawError> for ApiError {
    fn from(err: DrawError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            // A v4 id collision on add is not something the client caused.
            StoreError::DuplicateId(_) => Self::internal(err.to_string()),
            StoreError::NotFound(_) => {
                Self::bad_request("deck not found, are you sure the deck id is correct?")
            }
        }
    }
}

/// Parses a deck id from its path segment.
fn parse_deck_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request("deck id is not valid"))
}
