//! Language-model backends that turn a trip prompt into itinerary text.
//!
//! Exactly one backend is active per run, chosen by [`BackendKind`] in the
//! configuration. Every backend goes through [`generate_itinerary`], which
//! substitutes [`EMPTY_RESPONSE_MESSAGE`] when the model returns no text.

mod daemon;
mod hosted;
mod pipeline;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::{BackendKind, Config};
use crate::prompt::TripPrompt;

pub use daemon::DaemonBackend;
pub use hosted::HostedChatBackend;
pub use pipeline::PipelineBackend;

pub const EMPTY_RESPONSE_MESSAGE: &str = "Error: Unable to generate itinerary.";

#[async_trait]
pub trait ItineraryBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// One inference call. `Ok(None)` means the backend answered without any text.
    async fn complete(&self, prompt: &TripPrompt) -> Result<Option<String>>;
}

pub type DynBackend = dyn ItineraryBackend;

pub fn build_backend(config: &Config) -> Result<Box<DynBackend>> {
    let backend: Box<DynBackend> = match config.backend {
        BackendKind::HostedChat => Box::new(HostedChatBackend::new(&config.hosted, &config.http)?),
        BackendKind::LocalPipeline => {
            Box::new(PipelineBackend::new(&config.pipeline, &config.http)?)
        }
        BackendKind::LocalDaemon => Box::new(DaemonBackend::new(&config.daemon, &config.http)?),
    };
    Ok(backend)
}

pub async fn generate_itinerary(backend: &DynBackend, prompt: &TripPrompt) -> Result<String> {
    info!(backend = %backend.kind(), "generating itinerary");
    match backend.complete(prompt).await? {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => {
            warn!(backend = %backend.kind(), "backend returned no itinerary text");
            Ok(EMPTY_RESPONSE_MESSAGE.to_string())
        }
    }
}
