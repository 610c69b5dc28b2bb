use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use client::api::http::HttpNamesApi;
use client::config::ClientConfig;
use client::routes::Route;
use client::terminal;

/// Browse Prenoms games, vote on names and read results.
#[derive(Parser, Debug)]
#[command(name = "prenoms", version)]
struct Cli {
    /// Page to open: /games, /games/<id> or /games/<id>/results
    route: String,

    /// Origin of the API server (overrides PRENOMS_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Username to authenticate as (overrides PRENOMS_USER)
    #[arg(long)]
    user: Option<String>,

    /// Header carrying the username (overrides AUTH_HEADER_NAME)
    #[arg(long)]
    auth_header: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(user) = cli.user {
        config.user = Some(user);
    }
    if let Some(auth_header) = cli.auth_header {
        config.auth_header = auth_header;
    }

    let route: Route = cli.route.parse()?;
    let api = HttpNamesApi::new(&config).context("failed to build HTTP client")?;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    terminal::run(Arc::new(api), &route, stdin, &mut stdout).await?;
    Ok(())
}
