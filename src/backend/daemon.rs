use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::{ChatMessage, http_client};
use crate::config::{BackendKind, DaemonSettings, HttpSettings};
use crate::prompt::TripPrompt;

use super::ItineraryBackend;

/// Local model-runner daemon (Ollama `/api/chat`) against a pulled model.
#[derive(Debug, Clone)]
pub struct DaemonBackend {
    http: Client,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct DaemonChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct DaemonChatResponse {
    #[serde(default)]
    message: Option<DaemonMessage>,
}

#[derive(Debug, Deserialize)]
struct DaemonMessage {
    #[serde(default)]
    content: Option<String>,
}

impl DaemonBackend {
    pub fn new(settings: &DaemonSettings, http: &HttpSettings) -> Result<Self> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(anyhow!("Daemon base URL cannot be empty"));
        }

        Ok(Self {
            http: http_client(http).context("Failed to build daemon HTTP client")?,
            base_url,
            model: settings.model.clone(),
        })
    }
}

#[async_trait]
impl ItineraryBackend for DaemonBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::LocalDaemon
    }

    async fn complete(&self, prompt: &TripPrompt) -> Result<Option<String>> {
        let url = format!("{}/api/chat", self.base_url);
        debug!(%url, model = %self.model, "sending daemon chat request");

        let request = DaemonChatRequest {
            model: &self.model,
            messages: prompt.messages(),
            stream: false,
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Failed to reach model daemon at {}", self.base_url))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow!("Daemon error (status {}): {}", status, error_text));
        }

        let reply: DaemonChatResponse = response
            .json()
            .await
            .context("Failed to parse daemon chat response JSON")?;

        Ok(reply.message.and_then(|message| message.content))
    }
}
