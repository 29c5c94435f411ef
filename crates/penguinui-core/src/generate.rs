use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use penguinui_constants::STYLESHEET_EXTENSION;
use penguinui_css::Stylesheet;
use penguinui_error::{PenguinError, Result};
use penguinui_project::{PackageDescriptor, write_descriptor};

use crate::extract::extract;

pub struct GenerateManager;

impl GenerateManager {
    /// Turns the class rules of every stylesheet under `paths` into package
    /// descriptors written to `out_dir`. Returns the written files.
    pub fn generate(&self, paths: &[PathBuf], out_dir: &Path, debug: bool) -> Result<Vec<PathBuf>> {
        let files = collect_css_paths(paths);
        if files.is_empty() {
            return Err(PenguinError::NoCssFiles);
        }

        // Same-named packages from later files replace earlier ones.
        let mut packages: IndexMap<String, PackageDescriptor> = IndexMap::new();
        for file in &files {
            let css = fs::read_to_string(file).map_err(|e| {
                PenguinError::StylesheetError(file.display().to_string(), e.to_string())
            })?;

            let found = extract(&Stylesheet::parse(&css));
            penguinui_logger::debug(
                &format!("{}: {} packages", file.display(), found.len()),
                debug,
            );
            for descriptor in found {
                packages.insert(descriptor.name.clone(), descriptor);
            }
        }

        if packages.is_empty() {
            return Err(PenguinError::NoPackagesGenerated);
        }

        let mut written = Vec::with_capacity(packages.len());
        for descriptor in packages.values() {
            penguinui_logger::status(&format!("Writing {}", descriptor.name));
            let path = write_descriptor(out_dir, descriptor)
                .map_err(|e| PenguinError::IoError(e.to_string()))?;
            written.push(path);
        }

        penguinui_logger::finish(&format!(
            "Generated {} packages from {} files into {}",
            written.len(),
            files.len(),
            out_dir.display()
        ));
        Ok(written)
    }
}

/// Stylesheets named by `paths`: files as given, directories searched
/// recursively in name order. Paths that don't exist are skipped.
pub fn collect_css_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk_dir(path, &mut out);
        } else if is_stylesheet(path) && path.is_file() {
            out.push(path.clone());
        }
    }
    out
}

fn walk_dir(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    let mut entries: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
    entries.sort();

    for path in entries {
        if path.is_dir() {
            walk_dir(&path, out);
        } else if is_stylesheet(&path) {
            out.push(path);
        }
    }
}

fn is_stylesheet(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(STYLESHEET_EXTENSION))
}
