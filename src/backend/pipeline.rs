use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::http_client;
use crate::config::{BackendKind, HttpSettings, PipelineSettings};
use crate::prompt::TripPrompt;

use super::ItineraryBackend;

/// Local text-generation server (`POST /generate`): one text in, one text out.
#[derive(Debug, Clone)]
pub struct PipelineBackend {
    http: Client,
    base_url: String,
    model: String,
    max_length: u32,
    pad_token_id: u32,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    inputs: String,
    parameters: GenerateParameters,
}

#[derive(Debug, Serialize)]
struct GenerateParameters {
    max_new_tokens: u32,
    pad_token_id: u32,
}

#[derive(Debug, Deserialize)]
struct Generation {
    #[serde(default)]
    generated_text: Option<String>,
}

/// Servers answer with either a single object or a list of generations.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerateResponse {
    Batch(Vec<Generation>),
    Single(Generation),
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        match self {
            GenerateResponse::Batch(generations) => generations
                .into_iter()
                .next()
                .and_then(|generation| generation.generated_text),
            GenerateResponse::Single(generation) => generation.generated_text,
        }
    }
}

impl PipelineBackend {
    pub fn new(settings: &PipelineSettings, http: &HttpSettings) -> Result<Self> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(anyhow!("Pipeline base URL cannot be empty"));
        }

        Ok(Self {
            http: http_client(http).context("Failed to build pipeline HTTP client")?,
            base_url,
            model: settings.model.clone(),
            max_length: settings.max_length,
            pad_token_id: settings.pad_token_id,
        })
    }
}

#[async_trait]
impl ItineraryBackend for PipelineBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::LocalPipeline
    }

    async fn complete(&self, prompt: &TripPrompt) -> Result<Option<String>> {
        let url = format!("{}/generate", self.base_url);
        debug!(%url, model = %self.model, "sending text-generation request");

        let request = GenerateRequest {
            model: &self.model,
            inputs: prompt.as_text(),
            parameters: GenerateParameters {
                max_new_tokens: self.max_length,
                pad_token_id: self.pad_token_id,
            },
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to text-generation pipeline")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Pipeline error (status {}): {}",
                status,
                error_text
            ));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse text-generation response JSON")?;

        Ok(generated.into_text())
    }
}
