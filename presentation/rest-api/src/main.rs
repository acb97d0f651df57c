use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// SmartWaste API entry point
///
/// Layout follows the hexagonal split used across the workspace:
/// - config/: environment-driven configuration (server, CORS, Gemini)
/// - setup/: dependency wiring and the HTTP server
/// - api/: route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables (before anything reads them)
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration; the default API key is read here, once
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(config.gemini);

    // 5. Run server
    Server::run(config.server, config.cors, container).await?;

    Ok(())
}
