//! Destination context from the Wikipedia REST summary endpoint.
//!
//! A lookup never fails: anything other than a usable `extract` collapses
//! into one of two fixed fallback strings.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::client::http_client;
use crate::config::{ContextSettings, HttpSettings};

/// The lookup succeeded but the page had no summary text.
pub const NO_INFORMATION_FOUND: &str = "No information found.";
/// The lookup itself failed.
pub const NO_RESULTS_FOUND: &str = "No results found.";

#[async_trait]
pub trait ContextSource: Send + Sync {
    async fn fetch(&self, destination: &str) -> String;
}

#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(default)]
    extract: Option<String>,
}

#[derive(Debug, Clone)]
pub struct WikipediaClient {
    http: Client,
    base_url: Url,
}

impl WikipediaClient {
    pub fn new(context: &ContextSettings, http: &HttpSettings) -> Result<Self> {
        Self::with_base_url(context.base_url.as_str(), http)
    }

    pub fn with_base_url(base_url: &str, http: &HttpSettings) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid context base URL '{base_url}'"))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("Context base URL '{base_url}' cannot carry a path"));
        }

        Ok(Self {
            http: http_client(http).context("Failed to build context HTTP client")?,
            base_url,
        })
    }

    /// `{base_url}/{destination}` with the destination encoded as one path segment.
    pub fn summary_url(&self, destination: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(destination);
        }
        url
    }

    pub async fn summary(&self, destination: &str) -> String {
        let url = self.summary_url(destination);
        debug!(%url, "fetching destination summary");

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(destination, error = %err, "destination lookup failed");
                return NO_RESULTS_FOUND.to_string();
            }
        };

        if response.status() != StatusCode::OK {
            warn!(destination, status = %response.status(), "destination lookup returned non-success status");
            return NO_RESULTS_FOUND.to_string();
        }

        match response.json::<PageSummary>().await {
            Ok(PageSummary {
                extract: Some(extract),
            }) => extract,
            Ok(_) => {
                debug!(destination, "summary has no extract");
                NO_INFORMATION_FOUND.to_string()
            }
            Err(err) => {
                warn!(destination, error = %err, "summary body was not a page summary");
                NO_INFORMATION_FOUND.to_string()
            }
        }
    }
}

#[async_trait]
impl ContextSource for WikipediaClient {
    async fn fetch(&self, destination: &str) -> String {
        self.summary(destination).await
    }
}

#[cfg(test)]
mod tests;
