//! HTTP surface: upload a table with weights and impacts, download the ranked
//! result.

pub mod handlers;
pub mod routes;

pub use routes::router;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::{Config, OutputConfig};

/// Directories and column names injected into every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub upload_dir: PathBuf,
    pub result_dir: PathBuf,
    pub columns: OutputConfig,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            upload_dir: PathBuf::from(&config.server.upload_dir),
            result_dir: PathBuf::from(&config.server.result_dir),
            columns: config.output.clone(),
        }
    }

    /// Create the upload and result directories if they are missing.
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.upload_dir, &self.result_dir] {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory at {}", dir.display()))?;
        }
        Ok(())
    }
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &Config) -> Result<()> {
    let state = Arc::new(AppState::from_config(config));
    state.ensure_dirs()?;

    let addr = config.server.bind_addr()?;
    let app = router(
        state,
        config.server.max_upload_bytes,
        config.server.timeout()?,
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, "topsis server listening");

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;
    Ok(())
}
