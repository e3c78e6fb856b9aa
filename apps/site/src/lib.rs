//! Aderyn Website Library
//!
//! Router, handlers and templates for the Aderyn Building Consultancy site.

pub mod handlers;
pub mod router;
pub mod state;
pub mod templates;

use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tracing::{error, info};

use aderyn_shared::{CmsConfig, ServerConfig};

use crate::{router::create_router, state::AppState};

/// Run the website server until Ctrl-C.
pub async fn run(server: &ServerConfig, cms: &CmsConfig) -> Result<()> {
    let state = AppState::new(cms);
    let app = create_router(state, &server.public_dir);

    let listener = TcpListener::bind(&server.bind)
        .await
        .wrap_err_with(|| format!("failed to bind to {}", server.bind))?;

    info!(
        addr = %server.bind,
        project = cms.project_id.as_deref().unwrap_or("-"),
        dataset = %cms.dataset,
        "Listening on http://{}",
        server.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to install Ctrl-C handler");
        return;
    }
    info!("Shutting down gracefully...");
}
