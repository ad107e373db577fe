//! Exercises `OllamaClient` against a throwaway local HTTP server.

use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use cartograph_core::models::message::Message;
use cartograph_llm::client::{ModelClient, OllamaClient, OllamaConfig};
use cartograph_llm::error::LlmError;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/generate")
}

fn client(endpoint: String) -> OllamaClient {
    OllamaClient::new(&OllamaConfig {
        endpoint,
        model: "test-model".to_string(),
        timeout: None,
    })
    .unwrap()
}

fn conversation() -> Vec<Message> {
    vec![Message::system("sys"), Message::user("hello")]
}

#[tokio::test]
async fn posts_model_messages_and_stream_flag() {
    let seen: Arc<Mutex<Option<Value>>> = Arc::default();
    let recorder = seen.clone();
    let app = Router::new().route(
        "/api/generate",
        post(move |Json(body): Json<Value>| async move {
            *recorder.lock().unwrap() = Some(body);
            Json(json!({ "response": "generated text", "done": true }))
        }),
    );
    let endpoint = serve(app).await;

    let text = client(endpoint).generate(&conversation()).await.unwrap();

    assert_eq!(text, "generated text");
    let body = seen.lock().unwrap().clone().unwrap();
    assert_eq!(
        body,
        json!({
            "model": "test-model",
            "messages": [
                { "role": "system", "content": "sys" },
                { "role": "user", "content": "hello" }
            ],
            "stream": false
        })
    );
}

#[tokio::test]
async fn falls_back_to_chat_message_content() {
    let app = Router::new().route(
        "/api/generate",
        post(|| async { Json(json!({ "message": { "role": "assistant", "content": "chat reply" } })) }),
    );
    let endpoint = serve(app).await;

    let text = client(endpoint).generate(&conversation()).await.unwrap();
    assert_eq!(text, "chat reply");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let app = Router::new().route(
        "/api/generate",
        post(|| async { (StatusCode::NOT_FOUND, "model not found") }),
    );
    let endpoint = serve(app).await;

    let err = client(endpoint).generate(&conversation()).await.unwrap_err();
    match err {
        LlmError::Status { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "model not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn body_without_text_is_a_parse_error() {
    let app = Router::new().route("/api/generate", post(|| async { Json(json!({ "done": true })) }));
    let endpoint = serve(app).await;

    let err = client(endpoint).generate(&conversation()).await.unwrap_err();
    assert!(matches!(err, LlmError::ResponseParse(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_an_invocation_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(format!("http://{addr}/api/generate"))
        .generate(&conversation())
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::Invocation(_)));
}
