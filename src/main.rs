use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dropship_assistant::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = Arc::new(AppState::new());

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("🚀 dropshipping assistant running at http://{addr}");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
