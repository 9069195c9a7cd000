#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, header},
};
use http_body_util::BodyExt;
use jetfuel::{AppState, assistant::Assistant};
use jetfuel_contact::{ContactRelay, RelaySettings};
use jetfuel_notification::{MailCredentials, MailError, Mailer, OutboundEmail};
use serde_json::Value;
use tower::ServiceExt;

#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::default(),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send(
        &self,
        _credentials: &MailCredentials,
        email: &OutboundEmail,
    ) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email.clone());

        if self.fail {
            // A real lettre error, carrying text that must stay server-side
            let broken = OutboundEmail {
                to: "connection refused by smtp.gmail.com".to_owned(),
                ..email.clone()
            };
            broken.to_message()?;
        }

        Ok(())
    }
}

pub struct EchoAssistant;

#[async_trait::async_trait]
impl Assistant for EchoAssistant {
    async fn reply(&self, query: &str, context: &str) -> String {
        format!("{query} | {context}")
    }
}

pub fn configured() -> RelaySettings {
    RelaySettings {
        username: Some("agency@gmail.com".to_owned()),
        password: Some("app-password".to_owned()),
        contact_to: Some("inbox@jetfuel.io".to_owned()),
        contact_from: None,
    }
}

pub fn app(settings: RelaySettings, mailer: Arc<RecordingMailer>) -> Router {
    jetfuel::routes::router(AppState {
        relay: ContactRelay::new(settings, mailer),
        assistant: Arc::new(EchoAssistant),
    })
}

pub async fn send(app: Router, method: Method, uri: &str, body: &str) -> (u16, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}
