use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aconews::client::NewsClient;
use aconews::config::Config;
use aconews::routes::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aconews=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Using upstream news API at {}", config.base_url);

    // Create upstream client
    let client = NewsClient::new(&config.base_url, &config.api_key)?;

    let state = Arc::new(AppState { client });

    // Build router
    let app = routes::router(state).layer(TraceLayer::new_for_http());

    // Start server
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Server starting on http://localhost:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
