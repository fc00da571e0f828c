//! Filesystem predicates consulted when pruning the manifest.

use std::fs;
use std::path::Path;

/// Answers existence and directory questions about a path.
///
/// Implementations must not fail: a path that cannot be inspected is
/// reported as missing, so pruning only ever drops entries it cannot vouch
/// for.
pub trait PathProbe: Send + Sync {
    /// Whether a filesystem entry exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` may stay in the manifest: it exists and is not a
    /// directory.
    fn is_trackable(&self, path: &Path) -> bool {
        self.exists(path) && !self.is_dir(path)
    }
}

/// Probe backed by `std::fs::metadata`.
///
/// Symlinks are followed, so a dangling link does not exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl PathProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok()
    }

    // An entry we cannot stat is never a regular file we can track.
    fn is_dir(&self, path: &Path) -> bool {
        fs::metadata(path).map_or(true, |m| m.is_dir())
    }
}
