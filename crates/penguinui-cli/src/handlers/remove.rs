use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use penguinui_error::PenguinError;

pub struct RemoveHandler;

impl RemoveHandler {
    pub fn handle_remove(name: Option<&str>, packages: &Path) -> Result<()> {
        let name = name.ok_or_else(|| {
            PenguinError::MissingArgument("package name to remove".to_string())
        })?;

        Self::print_remove_header(name);
        penguinui_core::remove_package(packages, name)?;
        Ok(())
    }

    fn print_remove_header(name: &str) {
        eprintln!(
            "{} {} {}",
            "penguinui".bright_cyan().bold(),
            "remove".bright_white(),
            name.bright_white()
        );
        eprintln!();
    }
}
