// src/routes/mod.rs
pub mod chat;

use crate::{error::handle_panic, state::SharedState};
use axum::{
    Router,
    routing::{get, post},
};
use chat::{chat_handler, get_metrics_handler};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/metrics", get(get_metrics_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}
