//! Progress notifications emitted by the manifest engine.
//!
//! The engine never logs directly. It reports what it did to an injected
//! [`ManifestObserver`]; the binary installs [`TracingObserver`], tests can
//! install a recorder and assert on the events.

use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Something the manifest engine just did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestEvent {
    /// A manifest file was parsed
    Loaded {
        /// Backing file
        path: PathBuf,
        /// Distinct active paths read
        entries: usize,
    },
    /// A glob pattern was expanded against the filesystem
    Expanded {
        /// Pattern as given
        pattern: String,
        /// Number of usable matches
        matches: usize,
    },
    /// A glob match could not be used
    Skipped {
        /// Offending path
        path: PathBuf,
        /// Why it was left out
        reason: String,
    },
    /// Matches of an add pattern became active
    Added {
        /// Paths that were not active before
        count: usize,
    },
    /// Matches of a remove pattern were dropped
    Removed {
        /// Paths that were active before
        count: usize,
    },
    /// Stale entries were pruned
    Pruned {
        /// Active paths inspected
        checked: usize,
        /// Paths dropped because they are missing or directories
        stale: usize,
    },
    /// The manifest was written back to disk
    Saved {
        /// Backing file
        path: PathBuf,
        /// Lines written
        entries: usize,
    },
}

/// Receives [`ManifestEvent`]s. Must not influence the operation.
pub trait ManifestObserver: Send + Sync {
    /// Called after each step of an operation
    fn notify(&self, event: &ManifestEvent);
}

/// Observer that forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ManifestObserver for TracingObserver {
    fn notify(&self, event: &ManifestEvent) {
        match event {
            ManifestEvent::Loaded { path, entries } => {
                debug!(path = %path.display(), entries, "manifest parsed");
            }
            ManifestEvent::Expanded { pattern, matches } => {
                info!(pattern = %pattern, matches, "found {matches} files");
            }
            ManifestEvent::Skipped { path, reason } => {
                warn!(path = %path.display(), reason = %reason, "skipping glob match");
            }
            ManifestEvent::Added { count } => info!(count, "added {count} files"),
            ManifestEvent::Removed { count } => info!(count, "removed {count} files"),
            ManifestEvent::Pruned { checked, stale } => {
                info!(checked, stale, "removed {stale} stale files");
            }
            ManifestEvent::Saved { path, entries } => {
                info!(path = %path.display(), entries, "manifest saved");
            }
        }
    }
}

/// Observer that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ManifestObserver for NullObserver {
    fn notify(&self, _event: &ManifestEvent) {}
}
