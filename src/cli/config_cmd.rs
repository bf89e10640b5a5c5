use anyhow::Result;

use crate::config::{BackendKind, Config};

use super::args::ConfigArgs;
use super::util::mask_api_key;

pub(crate) fn handle_config(args: ConfigArgs, backend: Option<BackendKind>) -> Result<()> {
    let mut config = Config::load_unvalidated()?;

    if !args.has_updates() && backend.is_none() {
        print_config(&config)?;
        return Ok(());
    }

    apply_updates(&mut config, &args, backend);
    config.save()?;

    println!(
        "✅ Configuration saved to {}",
        Config::config_path()?.display()
    );
    print_config(&config)?;

    if let Some(warning) = validation_warning(&config) {
        println!("⚠️  {warning}");
    }

    Ok(())
}

/// The saved settings are kept even when they would not pass startup validation.
fn validation_warning(config: &Config) -> Option<String> {
    config.validate().err().map(|err| err.to_string())
}

fn apply_updates(config: &mut Config, args: &ConfigArgs, backend: Option<BackendKind>) {
    if let Some(backend) = backend {
        config.backend = backend;
    }
    if let Some(ref api_key) = args.api_key {
        config.hosted.api_key = api_key.clone();
    }
    if let Some(ref model) = args.hosted_model {
        config.hosted.model = model.clone();
    }
    if let Some(ref url) = args.pipeline_url {
        config.pipeline.base_url = url.clone();
    }
    if let Some(ref url) = args.daemon_url {
        config.daemon.base_url = url.clone();
    }
    if let Some(ref model) = args.daemon_model {
        config.daemon.model = model.clone();
    }
    if let Some(auto_install) = args.auto_install {
        config.daemon.auto_install = auto_install;
    }
    if let Some(ref url) = args.context_url {
        config.context.base_url = url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.http.timeout_secs = Some(timeout);
    }
}

fn print_config(config: &Config) -> Result<()> {
    println!("📋 Current configuration ({}):", Config::config_path()?.display());
    println!(
        "   Backend: {} ({})",
        config.backend,
        config.backend.display_name()
    );
    println!("   Model: {}", config.backend.model(config));
    println!("   API Key: {}", mask_api_key(&config.hosted.api_key));
    println!("   Hosted URL: {}", config.hosted.base_url);
    println!("   Pipeline URL: {}", config.pipeline.base_url);
    println!("   Daemon URL: {}", config.daemon.base_url);
    println!("   Auto-install: {}", config.daemon.auto_install);
    println!("   Context URL: {}", config.context.base_url);
    match config.http.timeout_secs {
        Some(secs) => println!("   Timeout: {secs}s"),
        None => println!("   Timeout: library default"),
    }
    Ok(())
}
