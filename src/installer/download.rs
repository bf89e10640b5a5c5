use std::path::Path;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::InstallError;

#[async_trait]
pub trait Downloader: Send + Sync {
    /// Write the body at `url` to `dest`, returning the number of bytes written.
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, InstallError>;
}

pub struct HttpDownloader {
    http: Client,
}

impl HttpDownloader {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

fn progress_bar(total: Option<u64>) -> ProgressBar {
    match total {
        Some(len) => {
            let pb = ProgressBar::new(len);
            let style = ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {bytes}/{total_bytes} ({percent}%)")
                .map(|style| style.progress_chars("##-"))
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            pb.set_style(style);
            pb
        }
        None => ProgressBar::new_spinner(),
    }
}

#[async_trait]
impl Downloader for HttpDownloader {
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, InstallError> {
        let download_error = |source| InstallError::Download {
            url: url.to_string(),
            source,
        };
        let io_error = |source| InstallError::Io {
            path: dest.to_path_buf(),
            source,
        };

        let mut response = self.http.get(url).send().await.map_err(download_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(InstallError::DownloadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let pb = progress_bar(response.content_length());
        let mut file = File::create(dest).await.map_err(io_error)?;
        let mut written = 0u64;

        while let Some(chunk) = response.chunk().await.map_err(download_error)? {
            file.write_all(&chunk).await.map_err(io_error)?;
            written += chunk.len() as u64;
            pb.inc(chunk.len() as u64);
        }
        file.flush().await.map_err(io_error)?;
        pb.finish_and_clear();

        debug!(url, bytes = written, dest = %dest.display(), "download complete");
        Ok(written)
    }
}
