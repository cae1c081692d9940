use std::path::PathBuf;

use thiserror::Error;

/// Failures reading or writing the data files.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create data directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize {what}")]
    Serialize {
        what: &'static str,
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Path of the file involved, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::CreateDir { path, .. }
            | Self::Parse { path, .. } => Some(path),
            Self::Serialize { .. } => None,
        }
    }
}
