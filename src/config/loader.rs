use anyhow::{Context, Result};
use dirs::home_dir;
use std::{fs, path::Path};
use tracing::debug;

use super::builder::ConfigBuilder;
use super::environment::apply_env_overrides;
use super::types::{BackendKind, FileConfig, PersistedConfig};
use super::validation::validate;
use super::Config;

impl Config {
    pub fn config_path() -> Result<std::path::PathBuf> {
        let mut path = home_dir().context("Could not determine home directory")?;
        path.push(".wayfare/config");
        Ok(path)
    }

    #[cfg(test)]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Defaults, then the config file, then environment variables. Not validated.
    pub fn load_unvalidated() -> Result<Self> {
        let path = Self::config_path()?;
        let mut builder = ConfigBuilder::new();

        if path.exists() {
            debug!(path = %path.display(), "loading config file");
            builder = Self::apply_file(builder, &path)?;
        }

        builder = apply_env_overrides(builder)?;
        builder.build()
    }

    pub fn load() -> Result<Self> {
        let config = Self::load_unvalidated()?;
        validate(&config)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Unable to create config directory {}", parent.display())
            })?;
        }

        let payload = PersistedConfig::from(self);
        let json = serde_json::to_string_pretty(&payload)
            .context("Failed to serialize configuration to JSON")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate(self)
    }

    fn apply_file(builder: ConfigBuilder, path: &Path) -> Result<ConfigBuilder> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed reading config at {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(builder);
        }

        let file: FileConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed parsing JSON config at {}", path.display()))?;

        file.apply(builder)
    }
}

impl FileConfig {
    pub fn apply(self, mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
        if let Some(backend) = self.backend {
            let parsed = backend
                .parse::<BackendKind>()
                .with_context(|| format!("Invalid backend '{backend}' in config file"))?;
            builder = builder.with_backend(parsed);
        }

        if let Some(hosted) = self.hosted {
            builder = builder.with_hosted(|settings| {
                if let Some(api_key) = hosted.api_key {
                    settings.api_key = api_key;
                }
                if let Some(base_url) = hosted.base_url {
                    settings.base_url = base_url;
                }
                if let Some(model) = hosted.model {
                    settings.model = model;
                }
                if let Some(temperature) = hosted.temperature {
                    settings.temperature = temperature;
                }
            });
        }

        if let Some(pipeline) = self.pipeline {
            builder = builder.with_pipeline(|settings| {
                if let Some(base_url) = pipeline.base_url {
                    settings.base_url = base_url;
                }
                if let Some(model) = pipeline.model {
                    settings.model = model;
                }
                if let Some(max_length) = pipeline.max_length {
                    settings.max_length = max_length;
                }
                if let Some(pad_token_id) = pipeline.pad_token_id {
                    settings.pad_token_id = pad_token_id;
                }
            });
        }

        if let Some(daemon) = self.daemon {
            builder = builder.with_daemon(|settings| {
                if let Some(base_url) = daemon.base_url {
                    settings.base_url = base_url;
                }
                if let Some(model) = daemon.model {
                    settings.model = model;
                }
                if let Some(auto_install) = daemon.auto_install {
                    settings.auto_install = auto_install;
                }
            });
        }

        if let Some(context) = self.context {
            builder = builder.with_context(|settings| {
                if let Some(base_url) = context.base_url {
                    settings.base_url = base_url;
                }
            });
        }

        if let Some(http) = self.http {
            builder = builder.with_http(|settings| {
                if http.timeout_secs.is_some() {
                    settings.timeout_secs = http.timeout_secs;
                }
                if let Some(user_agent) = http.user_agent {
                    settings.user_agent = user_agent;
                }
            });
        }

        Ok(builder)
    }
}
