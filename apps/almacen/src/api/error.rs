//! # API Errors
//!
//! Error-to-response mapping for the REST surface.
//!
//! Every error body uses the `{"detail": "<message>"}` envelope, so
//! clients can read one field regardless of status code.

use almacen_core::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors a handler can return to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The requested item id is not in the inventory.
    #[error("Item not found")]
    ItemNotFound,
}

impl ApiError {
    /// The HTTP status code for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ItemNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::ItemNotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));
        (self.status(), body).into_response()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use almacen_core::ItemId;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(ApiError::ItemNotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_not_found_converts() {
        let err = StoreError::NotFound(ItemId::new("x"));
        assert_eq!(ApiError::from(err), ApiError::ItemNotFound);
    }

    #[test]
    fn detail_message_matches_contract() {
        assert_eq!(ApiError::ItemNotFound.to_string(), "Item not found");
    }
}
