//! recapd - the intermediary service between the UI and the tracking API.
//!
//! Exposes `/api/sprints/{boardId}` and `/api/sprint/{sprintId}`, forwarding
//! to the tracking API with basic auth. Upstream failures become generic 500
//! bodies; details only land in the logs.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use recap::config;
use recap::jira::{JiraClient, Tracker};
use recap::server;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::load_config()?;
    let (base_url, username, api_token) = config.jira_credentials()?;
    let port = config.port()?;

    let tracker: Arc<dyn Tracker> = Arc::new(JiraClient::new(base_url, username, api_token));
    let app = server::router(tracker);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;
    tracing::info!("listening on http://0.0.0.0:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}
