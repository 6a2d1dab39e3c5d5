//! # HTTP API
//!
//! The axum REST surface over the core inventory.
//!
//! Routes:
//! - `POST   /items/`          create an item (201)
//! - `GET    /items/`          list all items
//! - `GET    /items/{item_id}` read one item
//! - `PUT    /items/{item_id}` replace an item's fields
//! - `DELETE /items/{item_id}` delete an item (204)
//! - `GET    /`                service index
//! - `GET    /openapi.json`    machine-readable API description
//! - `GET    /docs`            interactive documentation (Swagger UI)
//! - `GET    /redoc`           alternative documentation (ReDoc)

pub mod docs;
pub mod error;
pub mod items;

use almacen_core::Inventory;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// =============================================================================
// APPLICATION STATE
// =============================================================================

/// Shared state handed to every handler.
///
/// The inventory sits behind an async `RwLock`: list/get take read locks,
/// create/update/delete take the write lock.
#[derive(Clone)]
pub struct AppState {
    /// The shared in-memory inventory.
    pub(crate) inventory: Arc<RwLock<Inventory>>,
}

impl AppState {
    /// Create state with an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inventory: Arc::new(RwLock::new(Inventory::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Build the full application router with a fresh empty inventory.
#[must_use]
pub fn router() -> Router {
    router_with_state(AppState::new())
}

/// Build the application router over existing state.
///
/// Split out so tests and embedders can pre-seed the inventory.
#[must_use]
pub fn router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/", get(docs::service_index))
        .route("/openapi.json", get(docs::openapi))
        .route("/docs", get(docs::swagger_ui))
        .route("/redoc", get(docs::redoc))
        .route("/items/", get(items::list_items).post(items::create_item))
        .route(
            "/items/{item_id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
