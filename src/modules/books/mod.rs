pub mod memory;
pub mod models;
pub mod postgres;
pub mod routes;
pub mod store;

pub use memory::MemoryBookStore;
pub use models::{Book, NewBook};
pub use postgres::PgBookStore;
pub use store::{BookStore, SharedStore};

use anyhow::Context;
use async_trait::async_trait;
use axum::Router;
use bookshelf_kernel::{InitCtx, Module};
use serde_json::json;
use utoipa::PartialSchema;

/// Books module: CRUD over the `books` table through an injected [`BookStore`].
pub struct BooksModule {
    store: SharedStore,
}

impl BooksModule {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    fn base_path(&self) -> Option<String> {
        None
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        self.store
            .ping()
            .await
            .context("book store is not reachable")?;

        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            backend = ?ctx.settings.database.backend,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let book_schema = serde_json::to_value(Book::schema()).ok()?;
        let new_book_schema = serde_json::to_value(NewBook::schema()).ok()?;

        let error = |description: &str| {
            json!({
                "description": description,
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                    }
                }
            })
        };
        let integer = |description: &str| {
            json!({
                "description": description,
                "content": { "application/json": { "schema": { "type": "integer" } } }
            })
        };
        let id_param = json!({
            "name": "id",
            "in": "path",
            "required": true,
            "schema": { "type": "integer" }
        });

        Some(json!({
            "paths": {
                "/books": {
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "All books",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/Book" }
                                        }
                                    }
                                }
                            },
                            "500": error("Internal server error"),
                            "503": error("Storage unavailable")
                        }
                    },
                    "post": {
                        "summary": "Create a book",
                        "tags": ["Books"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/NewBook" }
                                }
                            }
                        },
                        "responses": {
                            "200": integer("Id assigned to the new book"),
                            "400": error("Malformed body"),
                            "422": error("Missing or mistyped fields"),
                            "503": error("Storage unavailable")
                        }
                    },
                    "put": {
                        "summary": "Replace a book",
                        "tags": ["Books"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Book" }
                                }
                            }
                        },
                        "responses": {
                            "200": integer("Rows affected, 0 when the id does not exist"),
                            "400": error("Malformed body"),
                            "422": error("Missing or mistyped fields"),
                            "503": error("Storage unavailable")
                        }
                    }
                },
                "/books/{id}": {
                    "get": {
                        "summary": "Get a book",
                        "tags": ["Books"],
                        "parameters": [id_param.clone()],
                        "responses": {
                            "200": {
                                "description": "The book",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Book" }
                                    }
                                }
                            },
                            "400": error("Id is not an integer"),
                            "404": error("Book not found"),
                            "503": error("Storage unavailable")
                        }
                    },
                    "delete": {
                        "summary": "Delete a book",
                        "tags": ["Books"],
                        "parameters": [id_param],
                        "responses": {
                            "200": integer("Rows affected, 0 when the id does not exist"),
                            "400": error("Id is not an integer"),
                            "503": error("Storage unavailable")
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": book_schema,
                    "NewBook": new_book_schema
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        self.store.close().await;
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module(store: SharedStore) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new(store))
}
