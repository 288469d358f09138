//! Roster Web
//!
//! Server-rendered front-end listing the users of a remote users API.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use roster_core::i18n::Locale;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod config;
pub mod pages;
pub mod render;

use config::Config;
use pages::AppState;

#[derive(Parser)]
#[command(name = "roster-web")]
#[command(about = "Roster users front-end", long_about = None)]
struct Cli {
    /// Base URL of the users API
    #[arg(long, env = "API_URL")]
    api_url: String,

    /// Address to listen on
    #[arg(long, env = "ROSTER_BIND_ADDR", default_value = "0.0.0.0:3000")]
    bind_addr: String,

    /// Language of the pages (ja, en)
    #[arg(long, env = "ROSTER_LOCALE", default_value = "ja")]
    locale: Locale,

    /// Seconds a cached API response may be reused
    #[arg(long, env = "ROSTER_REVALIDATE_SECS", default_value_t = 60)]
    revalidate_secs: u64,

    /// Per-request timeout in seconds for API calls
    #[arg(long, env = "ROSTER_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_web=debug,roster_client=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::new(config::parse_api_url(&cli.api_url)?)
        .with_bind_addr(cli.bind_addr)
        .with_locale(cli.locale)
        .with_revalidate(Duration::from_secs(cli.revalidate_secs))
        .with_request_timeout(cli.request_timeout_secs.map(Duration::from_secs));
    config.validate().context("Invalid configuration")?;

    tracing::info!("Starting Roster front-end for {}", config.api_url);

    let client = config.api_client()?;
    let app = pages::create_router(AppState::new(Arc::new(client), config.locale));

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
