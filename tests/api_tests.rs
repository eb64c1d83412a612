use dropship_assistant::error::handle_panic;
use dropship_assistant::message::{ChatResponse, ErrorResponse};
use dropship_assistant::routes::create_router;
use dropship_assistant::services::chatbot::{Intent, reply_for};
use dropship_assistant::services::metrics_manager::MetricsData;
use dropship_assistant::state::AppState;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::routing::get;
use std::sync::Arc;
use tower::util::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;

fn app() -> Router {
    create_router().with_state(Arc::new(AppState::new()))
}

fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

#[tokio::test]
async fn test_chat_endpoint() {
    let response = app()
        .oneshot(chat_request(
            r#"{"messages": [{"role": "user", "content": "What are trending products right now?"}]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let chat_resp: ChatResponse = read_json(response).await;
    assert_eq!(chat_resp.message, reply_for(Intent::Trending));
}

#[tokio::test]
async fn test_body_decoded_regardless_of_content_type() {
    let body = r#"{"messages": [{"role": "user", "content": "trend"}]}"#;
    for content_type in [None, Some("text/plain")] {
        let mut builder = Request::builder().method("POST").uri("/api/chat");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let request = builder.body(Body::from(body)).unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::OK,
            "content-type: {content_type:?}"
        );
        let chat_resp: ChatResponse = read_json(response).await;
        assert_eq!(chat_resp.message, reply_for(Intent::Trending));
    }
}

#[tokio::test]
async fn test_only_last_message_counts() {
    let body = r#"{"messages": [
        {"role": "user", "content": "trend"},
        {"role": "assistant", "content": "..."},
        {"role": "user", "content": "supplier"}
    ]}"#;
    let response = app().oneshot(chat_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let chat_resp: ChatResponse = read_json(response).await;
    assert_eq!(chat_resp.message, reply_for(Intent::Suppliers));
}

#[tokio::test]
async fn test_invalid_bodies_are_rejected() {
    for body in [
        r#"{"messages": []}"#,
        r#"{}"#,
        r#"{"messages": "trend"}"#,
        r#"{"messages": [{"role": "user"}]}"#,
        r#"{"messages": [{"role": "robot", "content": "trend"}]}"#,
        r#"not json"#,
    ] {
        let response = app().oneshot(chat_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let error: ErrorResponse = read_json(response).await;
        assert_eq!(error.error, "Invalid messages format");
    }
}

#[tokio::test]
async fn test_metrics_increment() {
    let state = Arc::new(AppState::new());
    let app = create_router().with_state(state.clone());

    let ok = chat_request(r#"{"messages": [{"role": "user", "content": "price"}]}"#);
    app.clone().oneshot(ok).await.unwrap();
    app.clone().oneshot(chat_request(r#"{"messages": []}"#)).await.unwrap();

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let metrics: MetricsData = read_json(response).await;
    assert_eq!(metrics.total_replies, 1);
    assert_eq!(metrics.rejected_requests, 1);
    assert_eq!(metrics.intent_usage.get("profit"), Some(&1));
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

async fn boom() -> &'static str {
    panic!("template exploded")
}

#[tokio::test]
async fn test_panic_becomes_internal_error() {
    let app: Router = Router::new()
        .route("/boom", get(boom))
        .layer(CatchPanicLayer::custom(handle_panic));

    let response = app
        .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "Internal server error");
}
