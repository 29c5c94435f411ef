use std::fs;
use std::path::{Path, PathBuf};

use penguinui_error::{PenguinError, Result};
use penguinui_project::{descriptor_path, is_valid_name};

pub struct RemoveManager;

impl RemoveManager {
    pub fn remove_package(&self, packages_dir: &Path, name: &str) -> Result<PathBuf> {
        if name.trim().is_empty() {
            return Err(PenguinError::MissingArgument(
                "package name to remove".to_string(),
            ));
        }

        if !is_valid_name(name) {
            return Err(PenguinError::InvalidPackageName(name.to_string()));
        }

        let file = descriptor_path(packages_dir, name);
        if !file.is_file() {
            return Err(PenguinError::PackageNotFound(name.to_string()));
        }

        fs::remove_file(&file)?;
        penguinui_logger::success(&format!("Removed {}", file.display()));
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_installed_package_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("button.json");
        fs::write(&file, "{}").unwrap();

        let removed = RemoveManager.remove_package(tmp.path(), "button").unwrap();

        assert_eq!(removed, file);
        assert!(!file.exists());
    }

    #[test]
    fn missing_package_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = RemoveManager.remove_package(tmp.path(), "ghost").unwrap_err();
        assert_eq!(err.to_string(), "Package 'ghost' not found");
    }

    #[test]
    fn names_outside_the_directory_are_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let packages = tmp.path().join("proj").join("penguinui");
        fs::create_dir_all(&packages).unwrap();
        let outside = tmp.path().join("x.json");
        fs::write(&outside, "{}").unwrap();

        let err = RemoveManager.remove_package(&packages, "../../x").unwrap_err();

        assert_eq!(err.to_string(), "Invalid package name '../../x'");
        assert!(outside.exists());
    }

    #[test]
    fn blank_name_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let err = RemoveManager.remove_package(tmp.path(), " ").unwrap_err();
        assert!(matches!(err, PenguinError::MissingArgument(_)));
    }
}
