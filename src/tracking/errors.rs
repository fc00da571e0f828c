//! Errors raised by manifest operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by manifest operations.
///
/// Both kinds are fatal to the current invocation. Stat failures while
/// pruning are never reported here; the probe folds them into "does not
/// exist".
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Opening, reading, writing or creating the parent directories of the
    /// manifest file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File or directory the failed operation targeted
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The glob passed to add or remove is not a valid pattern.
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        /// Pattern as given by the caller
        pattern: String,
        /// Position and reason reported by the glob parser
        #[source]
        source: glob::PatternError,
    },
}

impl ManifestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Short description of the error kind
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Io { .. } => "I/O Error",
            Self::Pattern { .. } => "Pattern Error",
        }
    }
}

/// Result alias for manifest operations.
pub type Result<T> = std::result::Result<T, ManifestError>;
