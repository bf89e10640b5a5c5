use std::io;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use httpmock::prelude::*;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use super::*;

#[derive(Default)]
struct FakeRunner {
    runtime_present: bool,
    failing: Vec<&'static str>,
    missing_binaries: Vec<&'static str>,
    ran: Mutex<Vec<CommandSpec>>,
}

impl FakeRunner {
    fn ran(&self) -> Vec<String> {
        self.ran
            .lock()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, command: &CommandSpec) -> io::Result<bool> {
        self.ran.lock().unwrap().push(command.clone());
        if self.missing_binaries.contains(&command.program.as_str()) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "not found"));
        }
        let rendered = command.to_string();
        Ok(!self.failing.iter().any(|needle| rendered.contains(needle)))
    }

    async fn probe(&self, _command: &CommandSpec) -> io::Result<bool> {
        if self.runtime_present {
            Ok(true)
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "ollama: not found"))
        }
    }
}

#[derive(Default)]
struct FakeDownloader {
    urls: Mutex<Vec<String>>,
    saw_file_written: Mutex<bool>,
}

#[async_trait]
impl Downloader for FakeDownloader {
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, InstallError> {
        self.urls.lock().unwrap().push(url.to_string());
        std::fs::write(dest, b"MZ").map_err(|source| InstallError::Io {
            path: dest.to_path_buf(),
            source,
        })?;
        *self.saw_file_written.lock().unwrap() = dest.exists();
        Ok(2)
    }
}

/// Writes part of the installer, then fails as a dropped connection would.
struct TruncatingDownloader;

#[async_trait]
impl Downloader for TruncatingDownloader {
    async fn download(&self, _url: &str, dest: &Path) -> Result<u64, InstallError> {
        std::fs::write(dest, b"MZpartial").map_err(|source| InstallError::Io {
            path: dest.to_path_buf(),
            source,
        })?;
        Err(InstallError::Io {
            path: dest.to_path_buf(),
            source: io::Error::new(io::ErrorKind::UnexpectedEof, "connection closed"),
        })
    }
}

/// Serves one response that promises more bytes than it sends.
async fn truncated_installer_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;
        let _ = socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100000\r\n\r\nMZpartial")
            .await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/OllamaSetup.exe")
}

#[test]
fn strategy_table_covers_three_platforms() {
    let windows = InstallPlan::for_os("windows").unwrap();
    assert_eq!(
        windows.method,
        InstallMethod::DownloadAndRun {
            url: "https://ollama.com/download/OllamaSetup.exe",
            file_name: "OllamaSetup.exe",
            args: vec!["/SILENT".to_string()],
        }
    );

    let linux = InstallPlan::for_os("linux").unwrap();
    assert_eq!(
        linux.method,
        InstallMethod::Command(CommandSpec::new(
            "sh",
            ["-c", "curl -fsSL https://ollama.com/install.sh | sh"]
        ))
    );

    let macos = InstallPlan::for_os("macos").unwrap();
    assert_eq!(
        macos.method,
        InstallMethod::Command(CommandSpec::new("brew", ["install", "ollama"]))
    );
    assert_eq!(macos.platform, Platform::MacOs);
}

#[test]
fn unknown_platform_is_rejected() {
    let err = InstallPlan::for_os("freebsd").unwrap_err();
    assert!(matches!(err, InstallError::UnsupportedPlatform(ref os) if os == "freebsd"));
    assert!(err.to_string().contains("freebsd"));
}

#[test]
fn command_spec_display_quotes_spaced_args() {
    let spec = CommandSpec::shell("curl -fsSL x | sh");
    assert_eq!(spec.to_string(), "sh -c \"curl -fsSL x | sh\"");
}

#[tokio::test]
async fn present_runtime_skips_install_and_pulls_model() {
    let runner = FakeRunner {
        runtime_present: true,
        ..FakeRunner::default()
    };
    let downloader = FakeDownloader::default();

    let report = Installer::new(&runner, &downloader, "llama3.2")
        .with_os("linux")
        .ensure_runtime()
        .await
        .unwrap();

    assert_eq!(report.runtime, RuntimeStatus::AlreadyPresent);
    assert_eq!(report.model, ModelStatus::Pulled);
    assert_eq!(runner.ran(), vec!["ollama pull llama3.2"]);
}

#[tokio::test]
async fn missing_runtime_on_linux_runs_install_script_then_pulls() {
    let runner = FakeRunner::default();
    let downloader = FakeDownloader::default();

    let report = Installer::new(&runner, &downloader, "llama3.2")
        .with_os("linux")
        .ensure_runtime()
        .await
        .unwrap();

    assert_eq!(report.runtime, RuntimeStatus::Installed(Platform::Linux));
    assert_eq!(
        runner.ran(),
        vec![
            "sh -c \"curl -fsSL https://ollama.com/install.sh | sh\"",
            "ollama pull llama3.2",
        ]
    );
    assert!(downloader.urls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn windows_install_downloads_runs_silently_and_cleans_up() {
    let work_dir = TempDir::new().unwrap();
    let runner = FakeRunner::default();
    let downloader = FakeDownloader::default();

    let report = Installer::new(&runner, &downloader, "llama3.2")
        .with_os("windows")
        .with_work_dir(work_dir.path())
        .ensure_runtime()
        .await
        .unwrap();

    assert_eq!(report.runtime, RuntimeStatus::Installed(Platform::Windows));
    assert_eq!(
        *downloader.urls.lock().unwrap(),
        vec!["https://ollama.com/download/OllamaSetup.exe"]
    );
    assert!(*downloader.saw_file_written.lock().unwrap());

    let ran = runner.ran.lock().unwrap().clone();
    let installer_path = work_dir.path().join("OllamaSetup.exe");
    assert_eq!(ran[0].program, installer_path.to_string_lossy());
    assert_eq!(ran[0].args, vec!["/SILENT"]);
    assert!(!installer_path.exists());
}

#[tokio::test]
async fn failed_windows_install_still_removes_installer() {
    let work_dir = TempDir::new().unwrap();
    let runner = FakeRunner {
        failing: vec!["OllamaSetup.exe"],
        ..FakeRunner::default()
    };
    let downloader = FakeDownloader::default();

    let err = Installer::new(&runner, &downloader, "llama3.2")
        .with_os("windows")
        .with_work_dir(work_dir.path())
        .ensure_runtime()
        .await
        .unwrap_err();

    assert!(matches!(err, InstallError::CommandFailed { .. }));
    assert!(!work_dir.path().join("OllamaSetup.exe").exists());
}

#[tokio::test]
async fn interrupted_download_removes_partial_installer() {
    let work_dir = TempDir::new().unwrap();
    let runner = FakeRunner::default();

    let err = Installer::new(&runner, &TruncatingDownloader, "llama3.2")
        .with_os("windows")
        .with_work_dir(work_dir.path())
        .ensure_runtime()
        .await
        .unwrap_err();

    assert!(matches!(err, InstallError::Io { .. }));
    assert!(!work_dir.path().join("OllamaSetup.exe").exists());
    assert!(runner.ran().is_empty());
}

#[tokio::test]
async fn truncated_http_download_leaves_no_installer_behind() {
    let url = truncated_installer_server().await;
    let work_dir = TempDir::new().unwrap();
    let runner = FakeRunner::default();
    let downloader = HttpDownloader::new(reqwest::Client::new());
    let plan = InstallPlan {
        platform: Platform::Windows,
        method: InstallMethod::DownloadAndRun {
            url: Box::leak(url.into_boxed_str()),
            file_name: "OllamaSetup.exe",
            args: vec!["/SILENT".to_string()],
        },
    };

    let err = Installer::new(&runner, &downloader, "llama3.2")
        .with_work_dir(work_dir.path())
        .execute(&plan)
        .await
        .unwrap_err();

    assert!(matches!(err, InstallError::Download { .. }));
    assert!(!work_dir.path().join("OllamaSetup.exe").exists());
    assert!(runner.ran().is_empty());
}

#[tokio::test]
async fn unsupported_platform_aborts_before_running_anything() {
    let runner = FakeRunner::default();
    let downloader = FakeDownloader::default();

    let err = Installer::new(&runner, &downloader, "llama3.2")
        .with_os("solaris")
        .ensure_runtime()
        .await
        .unwrap_err();

    assert!(matches!(err, InstallError::UnsupportedPlatform(_)));
    assert!(runner.ran().is_empty());
}

#[tokio::test]
async fn install_failure_propagates_without_pulling() {
    let runner = FakeRunner {
        failing: vec!["brew install"],
        ..FakeRunner::default()
    };
    let downloader = FakeDownloader::default();

    let err = Installer::new(&runner, &downloader, "llama3.2")
        .with_os("macos")
        .ensure_runtime()
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Command failed: brew install ollama");
    assert_eq!(runner.ran(), vec!["brew install ollama"]);
}

#[tokio::test]
async fn missing_package_manager_is_a_spawn_error() {
    let runner = FakeRunner {
        missing_binaries: vec!["brew"],
        ..FakeRunner::default()
    };
    let downloader = FakeDownloader::default();

    let err = Installer::new(&runner, &downloader, "llama3.2")
        .with_os("macos")
        .ensure_runtime()
        .await
        .unwrap_err();

    assert!(matches!(err, InstallError::Spawn { ref command, .. } if command == "brew install ollama"));
}

#[tokio::test]
async fn pull_failure_is_reported_and_not_fatal() {
    let runner = FakeRunner {
        runtime_present: true,
        failing: vec!["pull"],
        ..FakeRunner::default()
    };
    let downloader = FakeDownloader::default();

    let report = Installer::new(&runner, &downloader, "missing-model")
        .ensure_runtime()
        .await
        .unwrap();

    assert_eq!(report.runtime, RuntimeStatus::AlreadyPresent);
    assert_eq!(
        report.model,
        ModelStatus::PullFailed("Command failed: ollama pull missing-model".into())
    );
}

#[tokio::test]
async fn http_downloader_writes_body_to_disk() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/OllamaSetup.exe");
            then.status(200).body("installer-bytes");
        })
        .await;

    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("OllamaSetup.exe");
    let downloader = HttpDownloader::new(reqwest::Client::new());

    let written = downloader
        .download(&server.url("/OllamaSetup.exe"), &dest)
        .await
        .unwrap();

    assert_eq!(written, 15);
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "installer-bytes");
    mock.assert_async().await;
}

#[tokio::test]
async fn http_downloader_rejects_error_status() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/missing.exe");
            then.status(404);
        })
        .await;

    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("missing.exe");
    let downloader = HttpDownloader::new(reqwest::Client::new());

    let err = downloader
        .download(&server.url("/missing.exe"), &dest)
        .await
        .unwrap_err();

    assert!(matches!(err, InstallError::DownloadStatus { status: 404, .. }));
    assert!(!dest.exists());
}
