use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    // Config
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // Traversal (root-level only — subtree failures are skipped, not surfaced)
    #[error("path not found")]
    NotFound(PathBuf),

    #[error("permission denied")]
    PermissionDenied(PathBuf),

    #[error("IO error")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FinderError {
    /// The path this error occurred at, if applicable.
    /// Callers use this to present "Skipped: <path>" without pattern matching on variants.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::NotFound(p) | Self::PermissionDenied(p) | Self::Io { path: p, .. } => Some(p),
            Self::InvalidPattern { .. } => None,
        }
    }

    /// Classify a root-level filesystem failure by its `io::ErrorKind`.
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}
