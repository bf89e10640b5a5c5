use super::constants::*;
use super::types::{ContextSettings, DaemonSettings, HostedSettings, HttpSettings, PipelineSettings};

pub fn default_user_agent() -> String {
    format!("wayfare/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for HostedSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_HOSTED_BASE_URL.to_string(),
            model: DEFAULT_HOSTED_MODEL.to_string(),
            temperature: DEFAULT_HOSTED_TEMPERATURE,
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PIPELINE_BASE_URL.to_string(),
            model: DEFAULT_PIPELINE_MODEL.to_string(),
            max_length: DEFAULT_PIPELINE_MAX_LENGTH,
            pad_token_id: DEFAULT_PIPELINE_PAD_TOKEN_ID,
        }
    }
}

impl Default for DaemonSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DAEMON_BASE_URL.to_string(),
            model: DEFAULT_DAEMON_MODEL.to_string(),
            auto_install: false,
        }
    }
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CONTEXT_BASE_URL.to_string(),
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}
