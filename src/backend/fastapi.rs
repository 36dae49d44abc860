use crate::backend::traits::ChatBackend;
use crate::backend::types::ChatRequest;
use crate::config::BackendConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Text used when the backend answers with a shape we do not recognize
pub const FALLBACK_REPLY: &str = "Désolé, je n'ai pas pu générer une réponse.";

/// Chat backend served by the FastAPI agent service
pub struct FastApiBackend {
    client: Client,
    base_url: String,
    system_prompt: String,
}

#[derive(Debug, Serialize)]
struct ChatPayload<'a> {
    system_prompt: &'a str,
    message: &'a str,
    chat_history: Vec<HistoryEntry<'a>>,
    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    session_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct HistoryEntry<'a> {
    role: &'static str,
    content: &'a str,
}

impl FastApiBackend {
    /// Create a new backend client from configuration
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("listing-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            system_prompt: config.system_prompt.clone(),
        })
    }

    fn payload<'a>(&'a self, request: &'a ChatRequest) -> ChatPayload<'a> {
        ChatPayload {
            system_prompt: &self.system_prompt,
            message: &request.message,
            chat_history: request
                .history
                .iter()
                .map(|msg| HistoryEntry {
                    role: msg.sender.role(),
                    content: &msg.text,
                })
                .collect(),
            session_id: request.session_id.as_deref(),
        }
    }
}

#[async_trait]
impl ChatBackend for FastApiBackend {
    async fn complete(&self, request: &ChatRequest) -> Result<String> {
        let url = format!("{}/chat", self.base_url);
        debug!("Posting chat message to {}", url);

        let response = self
            .client
            .post(&url)
            .json(&self.payload(request))
            .send()
            .await
            .with_context(|| format!("Failed to reach chat backend at {}", self.base_url))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .context("Failed to decode chat backend response")?;

        if !status.is_success() {
            warn!("Chat backend returned status: {}", status);
            let detail = body
                .get("detail")
                .map(detail_text)
                .unwrap_or_else(|| "communication error with the chat backend".to_string());
            anyhow::bail!("Chat backend error ({}): {}", status, detail);
        }

        let reply = normalize_reply(&body);
        info!("Received {} bytes from {}", reply.len(), self.backend_name());
        Ok(reply)
    }

    fn backend_name(&self) -> &'static str {
        "FastAPI"
    }
}

/// Pull the assistant text out of the shapes the agent service produces.
pub fn normalize_reply(body: &Value) -> String {
    let Some(response) = body.get("response") else {
        return FALLBACK_REPLY.to_string();
    };

    if let Some(messages) = response.get("messages").and_then(Value::as_array) {
        return messages
            .last()
            .and_then(|last| last.get("content"))
            .and_then(non_empty_str)
            .unwrap_or(FALLBACK_REPLY)
            .to_string();
    }

    non_empty_str(response)
        .or_else(|| response.get("content").and_then(non_empty_str))
        .or_else(|| response.get("text").and_then(non_empty_str))
        .unwrap_or(FALLBACK_REPLY)
        .to_string()
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|text| !text.is_empty())
}

fn detail_text(detail: &Value) -> String {
    match detail {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
