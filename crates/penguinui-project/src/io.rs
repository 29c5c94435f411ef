use std::fs;
use std::path::{Path, PathBuf};

use anyhow::bail;

use crate::descriptor::{PackageDescriptor, is_valid_name, parse_lenient};
use penguinui_constants::{PACKAGE_EXTENSION, PACKAGES_DIR};

/// The packages directory of a project.
pub fn packages_dir(project_dir: &Path) -> PathBuf {
    project_dir.join(PACKAGES_DIR)
}

/// Where the descriptor for `name` lives inside `dir`.
pub fn descriptor_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{PACKAGE_EXTENSION}"))
}

/// Reads a descriptor file. `Ok(None)` means the file exists but isn't a
/// usable descriptor.
pub fn read_descriptor(path: &Path) -> anyhow::Result<Option<PackageDescriptor>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lenient(&content))
}

pub fn write_descriptor(dir: &Path, descriptor: &PackageDescriptor) -> anyhow::Result<PathBuf> {
    if !is_valid_name(&descriptor.name) {
        bail!("Invalid name");
    }

    fs::create_dir_all(dir)?;
    let path = descriptor_path(dir, &descriptor.name);
    let content = descriptor.to_json_pretty()?;
    fs::write(&path, content)?;
    Ok(path)
}
