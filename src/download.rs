//! Client for the backend's download-info endpoint.

use crate::format::{format_date, format_file_size};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Response of `GET /api/download-info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadInfo {
    #[serde(default)]
    pub anonymized_csv: Option<ArtifactInfo>,
}

/// One downloadable artifact as described by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactInfo {
    #[serde(default)]
    pub path: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub size_formatted: Option<String>,
    /// ISO-8601 modification time
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ArtifactInfo {
    /// Size text for the page: the server's own rendering if given,
    /// otherwise the byte count formatted locally.
    pub fn display_size(&self) -> Option<String> {
        self.size_formatted
            .clone()
            .or_else(|| self.size.map(format_file_size))
    }

    pub fn display_last_updated(&self) -> Option<String> {
        self.last_updated.as_deref().and_then(format_date)
    }
}

#[derive(Debug, Clone)]
pub struct DownloadClient {
    client: reqwest::Client,
    url: String,
}

impl DownloadClient {
    /// Client for `{base_url}/api/download-info`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}/api/download-info", base_url.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> Result<DownloadInfo> {
        debug!("Fetching download info from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to send download-info request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Download-info API error ({}): {}", status, body);
        }

        let info: DownloadInfo = response
            .json()
            .await
            .context("Failed to parse download-info response")?;

        Ok(info)
    }
}
