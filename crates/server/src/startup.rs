use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::runtime;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` plus environment overrides.
pub fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received; draining connections");
}

/// Public entry: open the store, build the app and serve until Ctrl+C
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    runtime::ensure_env(&cfg.database.url).await?;

    // Creates the file and the `cafes` table on first run
    let db = models::db::connect_and_migrate(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    let state = ServerState::new(db, cfg.auth.api_key.clone());
    let app = routes::build_router(state, build_cors());

    let listener = TcpListener::bind(cfg.bind_addr())
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("cannot bind {}: {e}", cfg.bind_addr())))?;
    let addr = listener.local_addr().map_err(anyhow::Error::from)?;
    info!(%addr, "starting cafe directory server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)?;
    Ok(())
}
