//! ml-gatewayd - text analysis gateway daemon.
//!
//! Serves the [`TextGateway`](ml_gateway::TextGateway) over HTTP/JSON.

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ml_gateway::Gateway;
use ml_gateway::model::load_models;
use ml_gateway::server::{self, Config, Environment};

/// Text analysis and content optimization gateway (FR/MG).
#[derive(Parser)]
#[command(name = "ml-gatewayd")]
#[command(version = ml_gateway::PKG_VERSION)]
#[command(about = "Bilingual text analysis gateway daemon")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Port to listen on; takes precedence over the config file and `PORT`.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_logging(config.server.environment);

    // Startup hook: must finish before the listener accepts connections.
    let models = load_models(&config.models.preload, None).await;
    let gateway = Gateway::builder().models(models).build()?;

    if config.server.cors_permissive {
        tracing::warn!("CORS allows any origin with credentials; restrict before production use");
    }
    let app = server::create_router(Arc::new(gateway), config.server.cors_permissive);

    let listener = TcpListener::bind(config.server.address()).await?;
    info!(
        version = %ml_gateway::version_string(),
        environment = ?config.server.environment,
        "ml-gatewayd starting"
    );

    server::serve(listener, app, server::shutdown_signal()).await?;
    Ok(())
}

fn init_logging(environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.default_log_filter()));

    if environment.is_development() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}
