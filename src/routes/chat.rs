use axum::{Json, body::Bytes, extract::State};
use tracing::{debug, info};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, Conversation},
    services::{chatbot::classify_and_respond, metrics_manager::MetricsData},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let conversation = match parse_conversation(&body) {
        Ok(conversation) => conversation,
        Err(err) => {
            state.metrics.record_rejection().await;
            return Err(err);
        }
    };

    let reply = classify_and_respond(&conversation);
    info!(intent = %reply.intent, turns = conversation.turns(), "generated reply");
    state.metrics.record_reply(reply.intent).await;

    Ok(Json(ChatResponse { message: reply.text }))
}

// The body is decoded whatever its content type. Missing field, wrong type,
// bad element and empty array all map to the same 400.
fn parse_conversation(body: &[u8]) -> Result<Conversation, AppError> {
    let request: ChatRequest = serde_json::from_slice(body).map_err(|err| {
        debug!(%err, "chat body failed to deserialize");
        AppError::InvalidMessages
    })?;
    Ok(Conversation::try_from(request.messages)?)
}

pub async fn get_metrics_handler(State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.get_metrics().await)
}
