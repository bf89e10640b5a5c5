use anyhow::anyhow;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendKind,
    pub hosted: HostedSettings,
    pub pipeline: PipelineSettings,
    pub daemon: DaemonSettings,
    pub context: ContextSettings,
    pub http: HttpSettings,
}

/// Which language-model service turns a prompt into itinerary text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendKind {
    #[default]
    #[serde(rename = "hosted")]
    HostedChat,
    #[serde(rename = "pipeline")]
    LocalPipeline,
    #[serde(rename = "daemon")]
    LocalDaemon,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::HostedChat => write!(f, "hosted"),
            BackendKind::LocalPipeline => write!(f, "pipeline"),
            BackendKind::LocalDaemon => write!(f, "daemon"),
        }
    }
}

impl std::str::FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hosted" => Ok(BackendKind::HostedChat),
            "pipeline" => Ok(BackendKind::LocalPipeline),
            "daemon" => Ok(BackendKind::LocalDaemon),
            other => Err(anyhow!("Unknown backend '{other}'")),
        }
    }
}

impl BackendKind {
    pub fn display_name(self) -> &'static str {
        match self {
            BackendKind::HostedChat => "Hosted chat",
            BackendKind::LocalPipeline => "Local pipeline",
            BackendKind::LocalDaemon => "Local daemon",
        }
    }

    pub fn model<'a>(self, config: &'a Config) -> &'a str {
        match self {
            BackendKind::HostedChat => &config.hosted.model,
            BackendKind::LocalPipeline => &config.pipeline.model,
            BackendKind::LocalDaemon => &config.daemon.model,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HostedSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub base_url: String,
    pub model: String,
    pub max_length: u32,
    pub pad_token_id: u32,
}

#[derive(Debug, Clone)]
pub struct DaemonSettings {
    pub base_url: String,
    pub model: String,
    pub auto_install: bool,
}

#[derive(Debug, Clone)]
pub struct ContextSettings {
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct HttpSettings {
    /// `None` keeps the HTTP library's default.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

// File configuration types
#[derive(Debug, Default, Deserialize)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub backend: Option<String>,
    #[serde(default)]
    pub hosted: Option<FileHostedSettings>,
    #[serde(default)]
    pub pipeline: Option<FilePipelineSettings>,
    #[serde(default)]
    pub daemon: Option<FileDaemonSettings>,
    #[serde(default)]
    pub context: Option<FileContextSettings>,
    #[serde(default)]
    pub http: Option<FileHttpSettings>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileHostedSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FilePipelineSettings {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub max_length: Option<u32>,
    pub pad_token_id: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileDaemonSettings {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub auto_install: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileContextSettings {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileHttpSettings {
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

// Serialization helpers
#[derive(Serialize)]
pub(super) struct PersistedConfig<'a> {
    pub backend: BackendKind,
    pub hosted: PersistedHosted<'a>,
    pub pipeline: PersistedPipeline<'a>,
    pub daemon: PersistedDaemon<'a>,
    pub context: PersistedContext<'a>,
    pub http: PersistedHttp<'a>,
}

#[derive(Serialize)]
pub(super) struct PersistedHosted<'a> {
    pub api_key: &'a str,
    pub base_url: &'a str,
    pub model: &'a str,
    pub temperature: f32,
}

#[derive(Serialize)]
pub(super) struct PersistedPipeline<'a> {
    pub base_url: &'a str,
    pub model: &'a str,
    pub max_length: u32,
    pub pad_token_id: u32,
}

#[derive(Serialize)]
pub(super) struct PersistedDaemon<'a> {
    pub base_url: &'a str,
    pub model: &'a str,
    pub auto_install: bool,
}

#[derive(Serialize)]
pub(super) struct PersistedContext<'a> {
    pub base_url: &'a str,
}

#[derive(Serialize)]
pub(super) struct PersistedHttp<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    pub user_agent: &'a str,
}

impl<'a> From<&'a Config> for PersistedConfig<'a> {
    fn from(config: &'a Config) -> Self {
        PersistedConfig {
            backend: config.backend,
            hosted: PersistedHosted {
                api_key: &config.hosted.api_key,
                base_url: &config.hosted.base_url,
                model: &config.hosted.model,
                temperature: config.hosted.temperature,
            },
            pipeline: PersistedPipeline {
                base_url: &config.pipeline.base_url,
                model: &config.pipeline.model,
                max_length: config.pipeline.max_length,
                pad_token_id: config.pipeline.pad_token_id,
            },
            daemon: PersistedDaemon {
                base_url: &config.daemon.base_url,
                model: &config.daemon.model,
                auto_install: config.daemon.auto_install,
            },
            context: PersistedContext {
                base_url: &config.context.base_url,
            },
            http: PersistedHttp {
                timeout_secs: config.http.timeout_secs,
                user_agent: &config.http.user_agent,
            },
        }
    }
}
