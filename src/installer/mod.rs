//! Provisioning for the local daemon backend: install the model runner if it
//! is missing, then pull the configured model.
//!
//! Install failures are fatal. A failed pull is reported and the caller
//! carries on without a working model.

mod download;
mod platform;
mod runner;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

pub use download::{Downloader, HttpDownloader};
pub use platform::{InstallMethod, InstallPlan, Platform};
pub use runner::{CommandRunner, CommandSpec, SystemRunner};

use platform::{pull_command, version_command};

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Unsupported platform '{0}': install the model runner manually")]
    UnsupportedPlatform(String),
    #[error("Failed to start '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("Command failed: {command}")]
    CommandFailed { command: String },
    #[error("Failed to download {url}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Download of {url} returned status {status}")]
    DownloadStatus { url: String, status: u16 },
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeStatus {
    AlreadyPresent,
    Installed(Platform),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelStatus {
    Pulled,
    PullFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub runtime: RuntimeStatus,
    pub model: ModelStatus,
}

pub struct Installer<'a> {
    runner: &'a dyn CommandRunner,
    downloader: &'a dyn Downloader,
    work_dir: PathBuf,
    os: String,
    model: String,
}

impl<'a> Installer<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        downloader: &'a dyn Downloader,
        model: impl Into<String>,
    ) -> Self {
        Self {
            runner,
            downloader,
            work_dir: PathBuf::from("."),
            os: std::env::consts::OS.to_string(),
            model: model.into(),
        }
    }

    /// Directory the Windows installer is downloaded into.
    pub fn with_work_dir(mut self, work_dir: impl Into<PathBuf>) -> Self {
        self.work_dir = work_dir.into();
        self
    }

    #[cfg(test)]
    pub fn with_os(mut self, os: impl Into<String>) -> Self {
        self.os = os.into();
        self
    }

    pub async fn ensure_runtime(&self) -> Result<ProvisionReport, InstallError> {
        let runtime = if self.runtime_present().await {
            info!("model runner already installed");
            RuntimeStatus::AlreadyPresent
        } else {
            let plan = InstallPlan::for_os(&self.os)?;
            info!(platform = %plan.platform, "installing model runner");
            self.execute(&plan).await?;
            RuntimeStatus::Installed(plan.platform)
        };

        let model = self.pull_model().await;
        Ok(ProvisionReport { runtime, model })
    }

    async fn runtime_present(&self) -> bool {
        match self.runner.probe(&version_command()).await {
            Ok(success) => success,
            Err(err) => {
                info!(error = %err, "model runner not found");
                false
            }
        }
    }

    pub async fn execute(&self, plan: &InstallPlan) -> Result<(), InstallError> {
        match &plan.method {
            InstallMethod::Command(command) => self.run_checked(command).await,
            InstallMethod::DownloadAndRun {
                url,
                file_name,
                args,
            } => {
                let path = self.work_dir.join(file_name);
                let result = match self.downloader.download(url, &path).await {
                    Ok(_) => {
                        let command =
                            CommandSpec::new(path.to_string_lossy(), args.iter().cloned());
                        self.run_checked(&command).await
                    }
                    Err(err) => Err(err),
                };

                remove_installer(&path).await;
                result
            }
        }
    }

    async fn pull_model(&self) -> ModelStatus {
        let command = pull_command(&self.model);
        match self.run_checked(&command).await {
            Ok(()) => ModelStatus::Pulled,
            Err(err) => {
                warn!(model = %self.model, error = %err, "model pull failed");
                ModelStatus::PullFailed(err.to_string())
            }
        }
    }

    async fn run_checked(&self, command: &CommandSpec) -> Result<(), InstallError> {
        let success = self
            .runner
            .run(command)
            .await
            .map_err(|source| InstallError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if success {
            Ok(())
        } else {
            Err(InstallError::CommandFailed {
                command: command.to_string(),
            })
        }
    }
}

/// A partial download may or may not have created the file.
async fn remove_installer(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => warn!(path = %path.display(), error = %err, "failed to remove installer"),
    }
}

#[cfg(test)]
mod tests;
