use anyhow::{Result, anyhow};

use super::constants::HOSTED_API_KEY_ENV;
use super::types::{BackendKind, Config};

pub fn validate(config: &Config) -> Result<()> {
    if config.backend == BackendKind::HostedChat && config.hosted.api_key.trim().is_empty() {
        return Err(anyhow!(
            "{} API key not found. Set {} or add it to {}",
            config.backend.display_name(),
            HOSTED_API_KEY_ENV,
            Config::config_path()?.display()
        ));
    }

    if config.pipeline.max_length == 0 {
        return Err(anyhow!("Pipeline max_length must be greater than zero"));
    }

    Ok(())
}
