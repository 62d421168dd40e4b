//! Manifest parse errors. Line numbers are 1-based.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("line {line}: invalid package name {name:?}")]
    InvalidName { line: usize, name: String },

    #[error("line {line}: empty version after '=='")]
    EmptyVersion { line: usize },

    #[error("line {line}: invalid version {version:?}")]
    InvalidVersion { line: usize, version: String },

    #[error("line {line}: unsupported version specifier in {text:?} (only '==' pins are allowed)")]
    UnsupportedSpecifier { line: usize, text: String },

    #[error("line {line}: duplicate requirement {name:?}")]
    Duplicate { line: usize, name: String },

    #[error("failed to read manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Offending line, when the error came from parsing.
    pub fn line(&self) -> Option<usize> {
        match self {
            ManifestError::InvalidName { line, .. }
            | ManifestError::EmptyVersion { line }
            | ManifestError::InvalidVersion { line, .. }
            | ManifestError::UnsupportedSpecifier { line, .. }
            | ManifestError::Duplicate { line, .. } => Some(*line),
            ManifestError::Io { .. } => None,
        }
    }
}
