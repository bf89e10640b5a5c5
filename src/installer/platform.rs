use std::fmt;

use super::InstallError;
use super::runner::CommandSpec;

pub const RUNTIME_BINARY: &str = "ollama";
const WINDOWS_INSTALLER_URL: &str = "https://ollama.com/download/OllamaSetup.exe";
const WINDOWS_INSTALLER_FILE: &str = "OllamaSetup.exe";
const LINUX_INSTALL_SCRIPT: &str = "curl -fsSL https://ollama.com/install.sh | sh";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

impl Platform {
    /// Map an OS identifier as reported by `std::env::consts::OS`.
    pub fn from_os(os: &str) -> Result<Self, InstallError> {
        match os {
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "macos" => Ok(Platform::MacOs),
            other => Err(InstallError::UnsupportedPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::Linux => write!(f, "linux"),
            Platform::MacOs => write!(f, "macos"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallMethod {
    /// Fetch an installer into the working directory, run it with `args`, then delete it.
    DownloadAndRun {
        url: &'static str,
        file_name: &'static str,
        args: Vec<String>,
    },
    Command(CommandSpec),
}

/// How to install the model runner on one platform. Pure data; nothing runs here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub platform: Platform,
    pub method: InstallMethod,
}

impl InstallPlan {
    pub fn for_platform(platform: Platform) -> Self {
        let method = match platform {
            Platform::Windows => InstallMethod::DownloadAndRun {
                url: WINDOWS_INSTALLER_URL,
                file_name: WINDOWS_INSTALLER_FILE,
                args: vec!["/SILENT".to_string()],
            },
            Platform::Linux => InstallMethod::Command(CommandSpec::shell(LINUX_INSTALL_SCRIPT)),
            Platform::MacOs => {
                InstallMethod::Command(CommandSpec::new("brew", ["install", RUNTIME_BINARY]))
            }
        };
        Self { platform, method }
    }

    pub fn for_os(os: &str) -> Result<Self, InstallError> {
        Platform::from_os(os).map(Self::for_platform)
    }
}

pub fn version_command() -> CommandSpec {
    CommandSpec::new(RUNTIME_BINARY, ["--version"])
}

pub fn pull_command(model: &str) -> CommandSpec {
    CommandSpec::new(RUNTIME_BINARY, ["pull", model])
}
