use std::fmt;

#[derive(Debug)]
pub enum PenguinError {
    PackageNotFound(String),
    InvalidPackageName(String),
    InvalidDescriptor(String),
    DownloadFailed(String, String),
    NetworkError(String),
    IoError(String),
    StylesheetError(String, String),
    NoCssFiles,
    NoPackagesGenerated,
    MissingArgument(String),
}

impl fmt::Display for PenguinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PackageNotFound(name) => {
                write!(f, "Package '{name}' not found")
            }
            Self::InvalidPackageName(name) => {
                write!(f, "Invalid package name '{name}'")
            }
            Self::InvalidDescriptor(reason) => {
                write!(f, "Invalid package descriptor: {reason}")
            }
            Self::DownloadFailed(url, reason) => {
                write!(f, "Failed to download {url}: {reason}")
            }
            Self::NetworkError(msg) => {
                write!(f, "Network error: {msg}")
            }
            Self::IoError(msg) => {
                write!(f, "IO error: {msg}")
            }
            Self::StylesheetError(path, msg) => {
                write!(f, "Failed to process stylesheet {path}: {msg}")
            }
            Self::NoCssFiles => {
                write!(f, "No CSS files found.")
            }
            Self::NoPackagesGenerated => {
                write!(f, "No class rules with declarations found in any CSS file.")
            }
            Self::MissingArgument(what) => {
                write!(f, "Missing {what}")
            }
        }
    }
}

impl PenguinError {
    /// Process exit code for a command that failed with this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NoCssFiles => 2,
            Self::NoPackagesGenerated => 3,
            _ => 1,
        }
    }
}

impl std::error::Error for PenguinError {}

impl From<anyhow::Error> for PenguinError {
    fn from(err: anyhow::Error) -> Self {
        Self::InvalidDescriptor(err.to_string())
    }
}

impl From<std::io::Error> for PenguinError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PenguinError>;
