//! Wiring that turns settings into a running service process.

use std::{fmt, str::FromStr, sync::Arc};

use anyhow::{anyhow, Context};
use bookshelf_kernel::{
    settings::{DatabaseBackend, DatabaseSettings, Settings},
    InitCtx, ModuleRegistry,
};

use crate::modules::{
    books::{self, MemoryBookStore, PgBookStore, SharedStore},
    version,
};

/// The independent services this workspace ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Books,
    Version,
}

impl Service {
    pub fn name(&self) -> &'static str {
        match self {
            Service::Books => "books",
            Service::Version => "version",
        }
    }

    /// Title used for the service's OpenAPI document.
    pub fn title(&self) -> &'static str {
        match self {
            Service::Books => "Bookshelf Books API",
            Service::Version => "Bookshelf Version API",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Service {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "books" => Ok(Service::Books),
            "version" => Ok(Service::Version),
            other => Err(anyhow!(
                "unknown service '{}'; expected books/version",
                other
            )),
        }
    }
}

/// Open the book store the settings select.
pub async fn open_store(settings: &DatabaseSettings) -> anyhow::Result<SharedStore> {
    match settings.backend {
        DatabaseBackend::Postgres => {
            let pool = bookshelf_db::connect(settings).await?;
            Ok(Arc::new(PgBookStore::new(pool)))
        }
        DatabaseBackend::Memory => {
            tracing::warn!("using in-memory book store; data is lost on exit");
            Ok(Arc::new(MemoryBookStore::new()))
        }
    }
}

/// Register the modules that make up `service`.
pub async fn build_registry(service: Service, settings: &Settings) -> anyhow::Result<ModuleRegistry> {
    let mut registry = ModuleRegistry::new();

    match service {
        Service::Books => {
            let store = open_store(&settings.database)
                .await
                .context("failed to open book store")?;
            registry.register(books::create_module(store));
        }
        Service::Version => registry.register(version::create_module()),
    }

    Ok(registry)
}

/// Run `service` until a shutdown signal arrives.
pub async fn run(service: Service, settings: Settings) -> anyhow::Result<()> {
    tracing::info!(
        service = %service,
        env = ?settings.environment,
        port = settings.server.port,
        "bootstrap starting"
    );

    let registry = build_registry(service, &settings).await?;
    let ctx = InitCtx {
        settings: &settings,
    };

    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    tracing::info!(service = %service, "bootstrap complete");

    let served = bookshelf_http::start_server(&registry, &settings, service.title()).await;
    let stopped = registry.stop_all().await;

    served?;
    stopped
}
