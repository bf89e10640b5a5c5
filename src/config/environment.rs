use anyhow::{Context, Result, anyhow};
use std::env;

use super::builder::ConfigBuilder;
use super::constants::HOSTED_API_KEY_ENV;
use super::types::BackendKind;

pub fn apply_env_overrides(mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
    if let Some(backend_raw) = env_string("WAYFARE_BACKEND")? {
        let backend = backend_raw
            .parse::<BackendKind>()
            .with_context(|| format!("Failed to parse WAYFARE_BACKEND value '{backend_raw}'"))?;
        builder = builder.with_backend(backend);
    }

    if let Some(api_key) = env_string(HOSTED_API_KEY_ENV)? {
        builder = builder.with_hosted(|hosted| hosted.api_key = api_key);
    }

    if let Some(base_url) = env_string("WAYFARE_HOSTED_BASE_URL")? {
        builder = builder.with_hosted(|hosted| hosted.base_url = base_url);
    }

    if let Some(model) = env_string("WAYFARE_HOSTED_MODEL")? {
        builder = builder.with_hosted(|hosted| hosted.model = model);
    }

    if let Some(base_url) = env_string("WAYFARE_PIPELINE_URL")? {
        builder = builder.with_pipeline(|pipeline| pipeline.base_url = base_url);
    }

    if let Some(model) = env_string("WAYFARE_PIPELINE_MODEL")? {
        builder = builder.with_pipeline(|pipeline| pipeline.model = model);
    }

    if let Some(max_length) = env_u32("WAYFARE_MAX_LENGTH")? {
        builder = builder.with_pipeline(|pipeline| pipeline.max_length = max_length);
    }

    if let Some(base_url) = env_string("WAYFARE_DAEMON_URL")? {
        builder = builder.with_daemon(|daemon| daemon.base_url = base_url);
    }

    if let Some(model) = env_string("WAYFARE_DAEMON_MODEL")? {
        builder = builder.with_daemon(|daemon| daemon.model = model);
    }

    if let Some(auto_install) = env_bool("WAYFARE_AUTO_INSTALL")? {
        builder = builder.with_daemon(|daemon| daemon.auto_install = auto_install);
    }

    if let Some(base_url) = env_string("WAYFARE_CONTEXT_URL")? {
        builder = builder.with_context(|context| context.base_url = base_url);
    }

    if let Some(timeout) = env_u64("WAYFARE_TIMEOUT_SECS")? {
        builder = builder.with_http(|http| http.timeout_secs = Some(timeout));
    }

    Ok(builder)
}

pub fn env_string(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(anyhow!("{key} contains invalid UTF-8")),
    }
}

pub fn env_u64(key: &str) -> Result<Option<u64>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .parse::<u64>()
            .with_context(|| format!("Failed to parse {key} as u64"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}

pub fn env_u32(key: &str) -> Result<Option<u32>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .parse::<u32>()
            .with_context(|| format!("Failed to parse {key} as u32"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}

pub fn env_bool(key: &str) -> Result<Option<bool>> {
    match env_string(key)?.as_deref().map(str::trim) {
        None => Ok(None),
        Some("1" | "true" | "yes" | "on") => Ok(Some(true)),
        Some("0" | "false" | "no" | "off" | "") => Ok(Some(false)),
        Some(other) => Err(anyhow!("Failed to parse {key} value '{other}' as bool")),
    }
}
