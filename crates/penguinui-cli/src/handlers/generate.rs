use std::path::{Path, PathBuf};

use anyhow::Result;

pub struct GenerateHandler;

impl GenerateHandler {
    pub fn handle_generate(paths: &[PathBuf], out: &Path, debug: bool) -> Result<()> {
        penguinui_core::generate_packages(paths, out, debug)?;
        Ok(())
    }
}
