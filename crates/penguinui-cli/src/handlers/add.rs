use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

pub struct AddHandler;

impl AddHandler {
    pub fn handle_add(url: &str, packages: &Path, debug: bool) -> Result<()> {
        Self::print_add_header(url);
        penguinui_core::add_package(packages, url, debug)?;
        Ok(())
    }

    fn print_add_header(url: &str) {
        eprintln!(
            "{} {} {}",
            "penguinui".bright_cyan().bold(),
            "add".bright_white(),
            url.bright_white()
        );
        eprintln!();
    }
}
