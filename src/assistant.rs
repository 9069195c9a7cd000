//! Project assistant backed by a hosted language model

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::AssistantConfig;

pub const FALLBACK_REPLY: &str =
    "I'm having trouble connecting to the neural link. Please try again shortly.";

const SYSTEM_INSTRUCTION: &str = "Be professional, concise, and bold. Align with the JetFuel brand identity: elite, high-performance, and futuristic. Use the brand voice of a high-speed technological partner.";

const TEMPERATURE: f32 = 0.7;

/// Answers client questions about their project. Never fails: errors turn into
/// [`FALLBACK_REPLY`].
#[async_trait]
pub trait Assistant: Send + Sync {
    async fn reply(&self, query: &str, context: &str) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("assistant API key not configured")]
    NotConfigured,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("response carried no text")]
    EmptyResponse,
}

pub struct GeminiAssistant {
    client: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl GeminiAssistant {
    pub fn new(config: &AssistantConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );

        if config.api_key.is_none() {
            tracing::warn!("Assistant API key not configured, replies will use the fallback");
        }

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            endpoint,
        })
    }

    async fn generate(&self, query: &str, context: &str) -> Result<String, AssistantError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AssistantError::NotConfigured)?;

        let request = GenerateRequest {
            system_instruction: Content::text(None, SYSTEM_INSTRUCTION),
            contents: vec![Content::text(Some("user"), &prompt(query, context))],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        };

        let response: GenerateResponse = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response.text().ok_or(AssistantError::EmptyResponse)
    }
}

#[async_trait]
impl Assistant for GeminiAssistant {
    #[tracing::instrument(skip_all)]
    async fn reply(&self, query: &str, context: &str) -> String {
        match self.generate(query, context).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "Assistant request failed");
                FALLBACK_REPLY.to_owned()
            }
        }
    }
}

fn prompt(query: &str, context: &str) -> String {
    format!(
        "Context: You are the JetFuel AI assistant. You help clients understand their project status and digital strategy.\n\
         Project Details: {context}\n\
         User Question: {query}"
    )
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_owned),
            parts: vec![Part {
                text: Some(text.to_owned()),
            }],
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateResponse {
    fn text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        (!text.is_empty()).then_some(text)
    }
}
