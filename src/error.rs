// src/error.rs
use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::message::{EmptyConversation, ErrorResponse};

const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid messages format")]
    InvalidMessages,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<EmptyConversation> for AppError {
    fn from(_: EmptyConversation) -> Self {
        AppError::InvalidMessages
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidMessages => {
                warn!("rejected chat request: {self}");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Internal(err) => {
                error!("error in chat API: {err:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Turns a handler panic into the generic 500 body.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::Internal(anyhow::anyhow!("handler panicked: {details}")).into_response()
}
