use std::path::{Path, PathBuf};

use anyhow::Result;

use penguinui_core::TransformOptions;

pub struct BuildHandler;

impl BuildHandler {
    pub fn handle_build(
        input: &Path,
        out: Option<&Path>,
        packages: PathBuf,
        experimental: bool,
        debug: bool,
    ) -> Result<()> {
        let options = TransformOptions {
            packages_dir: packages,
            enable_experimental: experimental,
        };
        penguinui_core::build_stylesheet(input, out, options, debug)?;
        Ok(())
    }
}
