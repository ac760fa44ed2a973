//! checkout-server
//!
//! Serves the `get_payment_url` callable over HTTP.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checkout_server::{config::AppConfig, create_router, setup::init_app_state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let bind_addr = config.bind_addr;

    let state = init_app_state(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    tracing::info!("🚀 checkout-server running on http://{}", bind_addr);
    tracing::info!("  GET  /health          - Health check");
    tracing::info!("  POST /get_payment_url - Create Stripe checkout");

    axum::serve(listener, app).await?;

    Ok(())
}
