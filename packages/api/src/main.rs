use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::config::ServerConfig;
use api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter())),
        )
        .init();

    info!(
        "Authenticating users with the \"{}\" header",
        config.auth_header
    );

    let state = AppState::in_memory(&config.auth_header);
    let app = api::app(state, &config.prefix);

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    info!(
        "Listening on {} (prefix: {:?})",
        listener.local_addr()?,
        config.prefix
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
