use portfolio_chatbot::message::{ChatResponse, ErrorBody, HealthResponse};
use portfolio_chatbot::routes::{build_app, create_router};
use portfolio_chatbot::services::{GenerationError, TextGenerator};
use portfolio_chatbot::state::AppState;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::util::ServiceExt;

const PERSONA: &str = "You are the portfolio assistant for Al John.";

enum Outcome {
    Reply(&'static str),
    ApiError(u16, &'static str),
    Malformed,
}

struct StubGenerator {
    outcome: Outcome,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.outcome {
            Outcome::Reply(text) => Ok(text.to_string()),
            Outcome::ApiError(status, message) => Err(GenerationError::Api {
                status: *status,
                message: message.to_string(),
            }),
            Outcome::Malformed => Err(GenerationError::MalformedResponse(
                "no candidate text in response".to_string(),
            )),
        }
    }
}

fn app_with(stub: Arc<StubGenerator>) -> Router {
    let state = Arc::new(AppState::new(PERSONA, stub));
    create_router().with_state(state)
}

fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_body(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn test_chat_returns_upstream_text() {
    let stub = StubGenerator::new(Outcome::Reply("Node.js, Vue.js, Tailwind CSS"));
    let app = app_with(stub.clone());

    let response = app
        .oneshot(chat_request(r#"{"message": "What skills does Al John have?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_body(response).await;
    let chat_resp: ChatResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(chat_resp.response, "Node.js, Vue.js, Tailwind CSS");

    assert_eq!(stub.calls(), 1);
    let prompts = stub.prompts.lock().unwrap();
    assert_eq!(
        prompts[0],
        format!("{PERSONA}\n\nUser: What skills does Al John have?")
    );
}

#[tokio::test]
async fn test_empty_body_is_rejected() {
    let stub = StubGenerator::new(Outcome::Reply("unused"));
    let app = app_with(stub.clone());

    let response = app.oneshot(chat_request("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "error": "Message is required and must be a string" })
    );
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_invalid_messages_never_reach_upstream() {
    let stub = StubGenerator::new(Outcome::Reply("unused"));
    let app = app_with(stub.clone());

    for body in [
        r#"{"message": null}"#,
        r#"{"message": 12}"#,
        r#"{"message": {"text": "hi"}}"#,
        r#"{"message": ""}"#,
        r#"{"history": []}"#,
        "not json at all",
    ] {
        let response = app.clone().oneshot(chat_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let err: ErrorBody = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(err.error, "Message is required and must be a string");
        assert!(err.details.is_none());
    }

    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let stub = StubGenerator::new(Outcome::Reply("unused"));
    let app = app_with(stub.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .body(Body::from(r#"{"message": "hello"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_history_is_ignored() {
    let stub = StubGenerator::new(Outcome::Reply("Hi there"));
    let app = app_with(stub.clone());

    let response = app
        .oneshot(chat_request(
            r#"{"message": "hello", "history": [{"role": "user", "text": "earlier secret"}]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(stub.calls(), 1);
    let prompts = stub.prompts.lock().unwrap();
    assert!(!prompts[0].contains("earlier secret"));
    assert!(prompts[0].ends_with("User: hello"));
}

#[tokio::test]
async fn test_upstream_error_maps_to_500() {
    let stub = StubGenerator::new(Outcome::ApiError(403, "API key not valid"));
    let app = app_with(stub.clone());

    let response = app.oneshot(chat_request(r#"{"message": "hello"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let err: ErrorBody = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(err.error, "Failed to get response from AI");
    assert_eq!(err.details.as_deref(), Some("API key not valid"));
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn test_malformed_upstream_maps_to_500() {
    let stub = StubGenerator::new(Outcome::Malformed);
    let app = app_with(stub.clone());

    let response = app.oneshot(chat_request(r#"{"message": "hello"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let err: ErrorBody = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(err.error, "Failed to get response from AI");
    assert!(err.details.unwrap().contains("no candidate text"));
}

#[tokio::test]
async fn test_health_ignores_upstream_state() {
    let stub = StubGenerator::new(Outcome::ApiError(500, "down"));
    let app = app_with(stub.clone());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let health: HealthResponse = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.message, "Chatbot API is running");
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let stub = StubGenerator::new(Outcome::Reply("unused"));
    let app = build_app(Arc::new(AppState::new(PERSONA, stub)));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("origin", "https://portfolio.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
