//! Municipal Complaint Portal server

use complaint_portal::{app, config, handlers::AppState, services::MockComplaintService};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "complaint_portal=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Starting Municipal Complaint Portal");
    tracing::info!("Environment: {:?}", config.environment);
    tracing::info!("Simulated search delay: {:?}", config.search_delay);

    // Create application state
    let state = AppState {
        complaints: Arc::new(MockComplaintService::new(config.search_delay)),
        is_production: config.is_production(),
    };

    let app = app(state, &config);

    // Start server
    let addr = config.server_addr();
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Static assets served from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
