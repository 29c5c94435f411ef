use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use penguinui_constants::PACKAGE_EXTENSION;
use penguinui_project::{PackageDescriptor, read_descriptor};

/// A named, ordered set of declarations available to `@use`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub styles: IndexMap<String, String>,
    /// File the package was loaded from; `None` for in-memory packages.
    pub path: Option<PathBuf>,
}

impl From<PackageDescriptor> for Package {
    fn from(descriptor: PackageDescriptor) -> Self {
        Self {
            name: descriptor.name,
            styles: descriptor.styles,
            path: None,
        }
    }
}

/// Packages available to one transform run, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct PackageTable {
    packages: HashMap<String, Package>,
}

impl PackageTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a package, replacing any previous package with the same name.
    pub fn insert(&mut self, package: Package) {
        self.packages.insert(package.name.clone(), package);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Package names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.packages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl FromIterator<PackageDescriptor> for PackageTable {
    fn from_iter<I: IntoIterator<Item = PackageDescriptor>>(iter: I) -> Self {
        let mut table = Self::new();
        for descriptor in iter {
            table.insert(descriptor.into());
        }
        table
    }
}

/// Loads every descriptor directly inside `dir`.
///
/// Subdirectories, non-`.json` files and files that aren't valid descriptors
/// are skipped. A missing directory yields an empty table. When two files
/// declare the same name, the one read later wins.
pub fn load_packages(dir: &Path) -> PackageTable {
    let mut table = PackageTable::new();

    let Ok(entries) = fs::read_dir(dir) else {
        return table;
    };

    let suffix = format!(".{PACKAGE_EXTENSION}");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(&suffix) {
            continue;
        }

        if let Ok(Some(descriptor)) = read_descriptor(&path) {
            let mut package = Package::from(descriptor);
            package.path = Some(path);
            table.insert(package);
        }
    }

    table
}
