use std::time::Duration;

use penguinui_constants::{CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS, USER_AGENT};
use penguinui_error::{PenguinError, Result};

pub struct DownloadClient {
    client: reqwest::Client,
}

impl Default for DownloadClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    pub async fn fetch_text(&self, url: &str, debug: bool) -> Result<String> {
        penguinui_logger::status(&format!("Downloading {url}..."));

        let resp = self.client.get(url).send().await.map_err(|e| {
            penguinui_logger::debug(&format!("Request to {url} failed: {e}"), debug);
            PenguinError::NetworkError(e.to_string())
        })?;

        let status = resp.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(PenguinError::DownloadFailed(
                url.to_string(),
                format!("HTTP {}", status.as_u16()),
            ));
        }

        let text = resp.text().await.map_err(|e| {
            penguinui_logger::debug(&format!("Failed to read body of {url}: {e}"), debug);
            PenguinError::NetworkError(e.to_string())
        })?;

        penguinui_logger::debug(&format!("Downloaded {url} ({} bytes)", text.len()), debug);
        Ok(text)
    }

    pub fn fetch_text_sync(&self, url: &str, debug: bool) -> Result<String> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(PenguinError::NetworkError(
                "fetch_text_sync called from async context. Use fetch_text instead.".to_string(),
            ));
        }

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                PenguinError::NetworkError(format!("Failed to create async runtime: {e}"))
            })?;

        rt.block_on(self.fetch_text(url, debug))
    }
}
