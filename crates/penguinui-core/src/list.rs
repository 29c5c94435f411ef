use std::fs;
use std::path::Path;

use penguinui_constants::PACKAGE_EXTENSION;
use penguinui_error::Result;
use penguinui_logger::format_package_line;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    pub name: String,
    pub size_bytes: u64,
}

pub struct ListManager;

impl ListManager {
    /// Installed package files, sorted by file name. `None` when the
    /// packages directory doesn't exist.
    pub fn installed(&self, packages_dir: &Path) -> Result<Option<Vec<InstalledPackage>>> {
        if !packages_dir.exists() {
            return Ok(None);
        }

        let suffix = format!(".{PACKAGE_EXTENSION}");
        let mut files: Vec<String> = fs::read_dir(packages_dir)?
            .flatten()
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .filter(|name| name.ends_with(&suffix))
            .collect();
        files.sort();

        let packages = files
            .into_iter()
            .map(|file| {
                let size_bytes = fs::metadata(packages_dir.join(&file)).map_or(0, |m| m.len());
                let name = file.strip_suffix(&suffix).unwrap_or(&file).to_string();
                InstalledPackage { name, size_bytes }
            })
            .collect();

        Ok(Some(packages))
    }

    pub fn list_packages(&self, packages_dir: &Path) -> Result<()> {
        match self.installed(packages_dir)? {
            None => penguinui_logger::warn("No penguinui directory (nothing installed)"),
            Some(packages) if packages.is_empty() => {
                penguinui_logger::warn("No packages installed");
            }
            Some(packages) => {
                for pkg in packages {
                    println!("{}", format_package_line(&pkg.name, pkg.size_bytes));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let listed = ListManager.installed(&tmp.path().join("penguinui")).unwrap();
        assert_eq!(listed, None);
    }

    #[test]
    fn lists_json_files_sorted_with_sizes() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("zeta.json"), "{}").unwrap();
        fs::write(tmp.path().join("alpha.json"), "{\"name\":1}").unwrap();
        fs::write(tmp.path().join("readme.md"), "ignored").unwrap();

        let listed = ListManager.installed(tmp.path()).unwrap().unwrap();

        assert_eq!(
            listed,
            [
                InstalledPackage {
                    name: "alpha".into(),
                    size_bytes: 10
                },
                InstalledPackage {
                    name: "zeta".into(),
                    size_bytes: 2
                },
            ]
        );
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(ListManager.installed(tmp.path()).unwrap(), Some(Vec::new()));
        ListManager.list_packages(tmp.path()).unwrap();
    }
}
