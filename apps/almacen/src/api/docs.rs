//! # Documentation Endpoints
//!
//! The self-describing part of the API: a service index at `/`, the
//! OpenAPI document at `/openapi.json`, and two static HTML shells that
//! render it — Swagger UI at `/docs` and ReDoc at `/redoc`.

use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};

/// API title advertised in the service index and OpenAPI document.
pub const API_TITLE: &str = "Almacén";

/// API description advertised in the OpenAPI document.
pub const API_DESCRIPTION: &str =
    "A simple RESTful API for managing catalog items (CRUD) with in-memory storage.";

// =============================================================================
// SERVICE INDEX
// =============================================================================

/// `GET /` — a small JSON index pointing at the documentation pages.
pub async fn service_index() -> Json<Value> {
    Json(json!({
        "service": API_TITLE,
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/docs",
        "redoc": "/redoc",
        "openapi": "/openapi.json",
    }))
}

// =============================================================================
// OPENAPI DOCUMENT
// =============================================================================

/// `GET /openapi.json` — the OpenAPI 3 description of the API.
pub async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

/// Build the OpenAPI document.
///
/// Assembled by hand: the surface is five routes over two schemas, which
/// does not warrant a schema-generation dependency.
#[must_use]
pub fn openapi_document() -> Value {
    let not_found = json!({
        "description": "Item not found",
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/Detail" }
            }
        }
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": API_TITLE,
            "description": API_DESCRIPTION,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/items/": {
                "get": {
                    "summary": "List all items",
                    "operationId": "list_items",
                    "responses": {
                        "200": {
                            "description": "All stored items",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Item" }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Create a new item",
                    "operationId": "create_item",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/ItemDraft" }
                            }
                        }
                    },
                    "responses": {
                        "201": {
                            "description": "The created item, including its generated id",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Item" }
                                }
                            }
                        }
                    }
                }
            },
            "/items/{item_id}": {
                "parameters": [{
                    "name": "item_id",
                    "in": "path",
                    "required": true,
                    "schema": { "type": "string" }
                }],
                "get": {
                    "summary": "Get an item by id",
                    "operationId": "get_item",
                    "responses": {
                        "200": {
                            "description": "The requested item",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Item" }
                                }
                            }
                        },
                        "404": not_found.clone()
                    }
                },
                "put": {
                    "summary": "Replace an existing item",
                    "operationId": "update_item",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/ItemDraft" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "The updated item",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Item" }
                                }
                            }
                        },
                        "404": not_found.clone()
                    }
                },
                "delete": {
                    "summary": "Delete an item",
                    "operationId": "delete_item",
                    "responses": {
                        "204": { "description": "Item deleted" },
                        "404": not_found
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "ItemDraft": {
                    "type": "object",
                    "required": ["name", "price"],
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string", "nullable": true },
                        "price": { "type": "number" },
                        "tax": { "type": "number", "nullable": true }
                    }
                },
                "Item": {
                    "type": "object",
                    "required": ["id", "name", "price"],
                    "properties": {
                        "id": { "type": "string" },
                        "name": { "type": "string" },
                        "description": { "type": "string", "nullable": true },
                        "price": { "type": "number" },
                        "tax": { "type": "number", "nullable": true }
                    }
                },
                "Detail": {
                    "type": "object",
                    "required": ["detail"],
                    "properties": {
                        "detail": { "type": "string" }
                    }
                }
            }
        }
    })
}

// =============================================================================
// DOCUMENTATION SHELLS
// =============================================================================

/// `GET /docs` — interactive documentation (Swagger UI shell).
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

/// `GET /redoc` — alternative documentation (ReDoc shell).
pub async fn redoc() -> Html<&'static str> {
    Html(REDOC_HTML)
}

const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Almacén - Swagger UI</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      SwaggerUIBundle({
        url: "/openapi.json",
        dom_id: "#swagger-ui",
      });
    };
  </script>
</body>
</html>
"##;

const REDOC_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Almacén - ReDoc</title>
  <meta name="viewport" content="width=device-width, initial-scale=1">
</head>
<body>
  <redoc spec-url="/openapi.json"></redoc>
  <script src="https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js"></script>
</body>
</html>
"#;

// =============================================================================
// TESTS
// =============================================================================
