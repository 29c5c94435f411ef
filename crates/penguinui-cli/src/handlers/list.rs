use std::path::Path;

use anyhow::Result;

pub struct ListHandler;

impl ListHandler {
    pub fn handle_list(packages: &Path) -> Result<()> {
        penguinui_core::list_packages(packages)
    }
}
