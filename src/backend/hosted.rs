use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use crate::client::{ChatClient, ChatCompletionRequest};
use crate::config::{BackendKind, HostedSettings, HttpSettings};
use crate::prompt::TripPrompt;

use super::ItineraryBackend;

/// Hosted chat-completion API: system and user messages, fixed model and temperature.
#[derive(Debug, Clone)]
pub struct HostedChatBackend {
    client: ChatClient,
    model: String,
    temperature: f32,
}

impl HostedChatBackend {
    pub fn new(hosted: &HostedSettings, http: &HttpSettings) -> Result<Self> {
        Ok(Self {
            client: ChatClient::new(hosted, http)?,
            model: hosted.model.clone(),
            temperature: hosted.temperature,
        })
    }
}

#[async_trait]
impl ItineraryBackend for HostedChatBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::HostedChat
    }

    async fn complete(&self, prompt: &TripPrompt) -> Result<Option<String>> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: prompt.messages(),
            temperature: Some(self.temperature),
        };

        let response = self
            .client
            .chat_completion(request)
            .await
            .context("Hosted itinerary call failed")?;

        if let Some(reason) = response
            .choices
            .first()
            .and_then(|choice| choice.finish_reason.as_deref())
        {
            debug!(reason, "hosted completion finished");
        }

        Ok(response.first_content())
    }
}
