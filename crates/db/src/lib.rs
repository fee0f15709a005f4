//! Postgres client factory and table bootstrap for the book store.

use anyhow::Context;
use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;

use bookshelf_kernel::settings::DatabaseSettings;

/// Idempotent definition of the `books` table. `year` is kept as text.
const BOOKS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS books (
        id     SERIAL PRIMARY KEY,
        title  TEXT NOT NULL,
        author TEXT NOT NULL,
        year   TEXT NOT NULL
    )
"#;

/// Failure reported by a storage backend, split by whether the caller may retry.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend could not be reached or has no capacity.
    #[error("storage backend unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// The backend answered but the statement failed.
    #[error("storage query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// The backend ran out of identifiers for new rows.
    #[error("{0} identifiers exhausted")]
    Exhausted(&'static str),
}

impl StoreError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => StoreError::Unavailable(err),
            other => StoreError::Query(other),
        }
    }
}

/// Open a connection pool against the configured Postgres database.
///
/// The pool uses the driver's default sizing. Connectivity is verified with
/// [`ping`] before the pool is returned.
pub async fn connect(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let url = settings
        .url
        .as_deref()
        .context("database.url is not set (BOOKSHELF_DATABASE__URL or DATABASE_URL)")?;

    tracing::info!(
        target: "bookshelf-db",
        url = %settings.redacted_url().unwrap_or_default(),
        "connecting to postgres"
    );

    let pool = PgPoolOptions::new()
        .connect(url)
        .await
        .context("failed to connect to postgres")?;

    ping(&pool).await.context("postgres ping failed")?;

    if settings.ensure_schema {
        ensure_schema(&pool)
            .await
            .context("failed to ensure books table")?;
    }

    Ok(pool)
}

/// Round-trip a trivial statement to prove the pool can reach the server.
pub async fn ping(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `books` table when it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(BOOKS_TABLE).execute(pool).await?;
    tracing::debug!(target: "bookshelf-db", "books table ensured");
    Ok(())
}
