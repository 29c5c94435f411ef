pub mod add;
pub mod aliases;
pub mod build;
pub mod diagnostics;
pub mod directives;
pub mod download;
pub mod extract;
pub mod generate;
pub mod list;
pub mod packages;
pub mod remove;
pub mod transform;

pub use add::AddManager;
pub use build::BuildManager;
pub use diagnostics::{Diagnostic, Severity};
pub use generate::GenerateManager;
pub use list::ListManager;
pub use packages::{Package, PackageTable, load_packages};
pub use remove::RemoveManager;
pub use transform::{TransformOptions, TransformReport, run, run_with_packages, transform_css};

use std::path::{Path, PathBuf};

pub fn build_stylesheet(
    input: &Path,
    out: Option<&Path>,
    options: TransformOptions,
    debug: bool,
) -> anyhow::Result<TransformReport> {
    let manager = BuildManager::new(options);
    manager
        .build(input, out, debug)
        .map_err(|e| anyhow::anyhow!(e))
}

pub fn add_package(packages_dir: &Path, url: &str, debug: bool) -> anyhow::Result<PathBuf> {
    let manager = AddManager::new();
    manager
        .add_from_url(packages_dir, url, debug)
        .map_err(|e| anyhow::anyhow!(e))
}

pub fn list_packages(packages_dir: &Path) -> anyhow::Result<()> {
    let manager = ListManager;
    manager
        .list_packages(packages_dir)
        .map_err(|e| anyhow::anyhow!(e))
}

pub fn remove_package(packages_dir: &Path, name: &str) -> anyhow::Result<PathBuf> {
    let manager = RemoveManager;
    manager
        .remove_package(packages_dir, name)
        .map_err(|e| anyhow::anyhow!(e))
}

pub fn generate_packages(
    paths: &[PathBuf],
    out_dir: &Path,
    debug: bool,
) -> anyhow::Result<Vec<PathBuf>> {
    let manager = GenerateManager;
    manager
        .generate(paths, out_dir, debug)
        .map_err(|e| anyhow::anyhow!(e))
}
