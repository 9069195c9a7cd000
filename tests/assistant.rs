use std::sync::Arc;

use axum::{Json, Router, http::Method, routing::post};
use jetfuel::{
    assistant::{Assistant, FALLBACK_REPLY, GeminiAssistant},
    config::AssistantConfig,
};
use serde_json::{Value, json};

mod helpers;

/// Stand-in for the hosted model: answers with the prompt it received
async fn fake_generate(Json(request): Json<Value>) -> Json<Value> {
    let prompt = request["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_owned();
    let temperature = request["generationConfig"]["temperature"].clone();

    Json(json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": format!("temperature={temperature} ") }, { "text": prompt }]
            }
        }]
    }))
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

    format!("http://{addr}")
}

fn config(base_url: String) -> AssistantConfig {
    AssistantConfig {
        api_key: Some("test-key".to_owned()),
        model: "gemini-test".to_owned(),
        base_url,
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn test_gemini_reply_round_trip() {
    let base_url = spawn(Router::new().route(
        "/v1beta/models/gemini-test:generateContent",
        post(fake_generate),
    ))
    .await;

    let assistant = GeminiAssistant::new(&config(base_url)).unwrap();
    let reply = assistant
        .reply("When do we launch?", "Solaris E-Commerce Rebrand")
        .await;

    assert!(reply.starts_with("temperature=0.7 "));
    assert!(reply.contains("Project Details: Solaris E-Commerce Rebrand"));
    assert!(reply.contains("User Question: When do we launch?"));
}

#[tokio::test]
async fn test_gemini_error_status_falls_back() {
    let base_url = spawn(Router::new().route(
        "/v1beta/models/gemini-test:generateContent",
        post(|| async { (axum::http::StatusCode::TOO_MANY_REQUESTS, "quota") }),
    ))
    .await;

    let assistant = GeminiAssistant::new(&config(base_url)).unwrap();

    assert_eq!(assistant.reply("hi", "").await, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_assistant_route() {
    let app = helpers::app(
        helpers::configured(),
        Arc::new(helpers::RecordingMailer::default()),
    );

    let (status, body) = helpers::send(
        app.clone(),
        Method::POST,
        "/api/assistant",
        r#"{"query":"status?","context":"proj-1"}"#,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "reply": "status? | proj-1" }));

    let (status, body) = helpers::send(
        app.clone(),
        Method::POST,
        "/api/assistant",
        r#"{"query":"  "}"#,
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({ "error": "Missing required field: query" }));

    for malformed in ["not json", r#"{"query": 5}"#, ""] {
        let (status, body) =
            helpers::send(app.clone(), Method::POST, "/api/assistant", malformed).await;
        assert_eq!(status, 400, "{malformed}");
        assert_eq!(body, json!({ "error": "Invalid JSON body" }));
    }
}
