//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

/// Ensure the SQLite file's directory exists before the pool opens it.
pub async fn ensure_env(database_url: &str) -> anyhow::Result<()> {
    common::env::ensure_sqlite_dir(database_url).await
}
