use std::path::{Path, PathBuf};

use penguinui_error::{PenguinError, Result};
use penguinui_project::{validate, write_descriptor};

use crate::download::DownloadClient;

pub struct AddManager {
    client: DownloadClient,
}

impl Default for AddManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AddManager {
    pub fn new() -> Self {
        Self {
            client: DownloadClient::new(),
        }
    }

    /// Downloads a descriptor and stores it as `<packages_dir>/<name>.json`.
    pub fn add_from_url(&self, packages_dir: &Path, url: &str, debug: bool) -> Result<PathBuf> {
        let raw = self.client.fetch_text_sync(url, debug)?;
        let path = Self::install_descriptor(packages_dir, &raw)?;
        penguinui_logger::success(&format!("Saved {}", path.display()));
        Ok(path)
    }

    /// Validates raw descriptor JSON and writes it into `packages_dir`.
    pub fn install_descriptor(packages_dir: &Path, raw: &str) -> Result<PathBuf> {
        let descriptor = validate(raw).map_err(|e| PenguinError::InvalidDescriptor(e.to_string()))?;
        write_descriptor(packages_dir, &descriptor).map_err(|e| PenguinError::IoError(e.to_string()))
    }
}
