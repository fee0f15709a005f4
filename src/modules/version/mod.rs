use async_trait::async_trait;
use axum::{routing::get, Json, Router};
use bookshelf_kernel::{InitCtx, Module};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{PartialSchema, ToSchema};

/// Payload served by the version endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VersionInfo {
    pub version: u32,
}

/// The API version this service reports.
pub const CURRENT: VersionInfo = VersionInfo { version: 1 };

/// Version module: a single read-only route at the server root.
pub struct VersionModule;

impl VersionModule {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for VersionModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for VersionModule {
    fn name(&self) -> &'static str {
        "version"
    }

    fn base_path(&self) -> Option<String> {
        None
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            version = CURRENT.version,
            "version module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new().route("/", get(current_version))
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let schema = serde_json::to_value(VersionInfo::schema()).ok()?;

        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "Current API version",
                        "tags": ["Version"],
                        "responses": {
                            "200": {
                                "description": "Version payload",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/VersionInfo" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": { "VersionInfo": schema }
            }
        }))
    }
}

async fn current_version() -> Json<VersionInfo> {
    Json(CURRENT)
}

/// Create a new instance of the version module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(VersionModule::new())
}
