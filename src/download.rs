use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{ForgeError, Result};

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Seam over variant fetching, stubbed in orchestrator tests.
#[async_trait]
pub trait FetchBytes: Send + Sync {
    /// Fetches `url` and writes the full body to `dest`, overwriting any
    /// existing file.
    async fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

#[derive(Clone)]
pub struct Downloader {
    http: reqwest::Client,
}

impl Downloader {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FetchBytes for Downloader {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        let response = self
            .http
            .get(url)
            .timeout(DOWNLOAD_TIMEOUT)
            .send()
            .await
            .map_err(|e| ForgeError::DownloadError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForgeError::DownloadError(format!(
                "GET {} returned {}",
                url, status
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ForgeError::DownloadError(e.to_string()))?;

        std::fs::write(dest, &bytes)?;
        log::info!("Downloaded: {}", dest.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_rejects_malformed_url() {
        let downloader = Downloader::new();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.png");

        let err = downloader.fetch("not a url", &dest).await.unwrap_err();
        assert!(matches!(err, ForgeError::DownloadError(_)));
        assert!(!dest.exists());
    }
}
