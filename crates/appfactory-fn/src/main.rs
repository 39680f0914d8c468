//! AppFactory processing function - Main entry point

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appfactory_fn::config::FunctionConfig;
use appfactory_fn::handler::ProcessingHandler;
use appfactory_fn::server::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,appfactory_fn=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AppFactory processing function");

    let config = FunctionConfig::from_env();
    // The api key is a secret; log everything but.
    tracing::info!(
        auth_enabled = config.auth_enabled,
        api_key_configured = config.api_key.is_some(),
        cors_origin = %config.cors_origin,
        port = config.port,
        "Configuration loaded"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(AppState {
        handler: ProcessingHandler::new(config),
    });

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
