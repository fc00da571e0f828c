//! Plain-text manifest of tracked file paths.
//!
//! A manifest is a file listing one path per line, sorted and without
//! duplicates. In memory it is an ordered set of the paths that are
//! currently *active*: paths that existed as regular files the last time
//! they were checked. Dropping a path from the set is how it gets
//! deactivated; [`Manifest::save`] writes exactly the active set, so an
//! inactive path has no further observable effect.
//!
//! # Post-condition
//!
//! After [`Manifest::add`], [`Manifest::remove`] or [`Manifest::prune`]
//! returns, every active path exists and is not a directory according to
//! the configured [`PathProbe`].
//!
//! # File format
//!
//! UTF-8, one path per line, `\n` terminated. Blank lines are ignored on
//! read and never written. A manifest with no active paths is a zero-byte
//! file.

use super::errors::{ManifestError, Result};
use super::events::{ManifestEvent, ManifestObserver, TracingObserver};
use super::probe::{FsProbe, PathProbe};
use glob::MatchOptions;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Persisted, deduplicated set of tracked paths
pub struct Manifest {
    /// Backing text file
    location: PathBuf,
    /// Active paths, kept sorted
    paths: BTreeSet<String>,
    /// Options used when expanding add/remove patterns
    match_options: MatchOptions,
    /// Decides which paths survive a prune
    probe: Arc<dyn PathProbe>,
    /// Receives a notification after every step
    observer: Arc<dyn ManifestObserver>,
}

impl Manifest {
    /// Create an empty manifest bound to `location`. Performs no I/O.
    #[must_use]
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
            paths: BTreeSet::new(),
            match_options: MatchOptions::new(),
            probe: Arc::new(FsProbe),
            observer: Arc::new(TracingObserver),
        }
    }

    /// Parse the manifest file at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Io`] if the file cannot be opened or is not
    /// valid UTF-8.
    pub fn load(location: impl Into<PathBuf>) -> Result<Self> {
        let mut manifest = Self::new(location);
        manifest.read()?;
        Ok(manifest)
    }

    /// Use `probe` instead of the real filesystem when pruning
    #[must_use]
    pub fn with_probe(mut self, probe: Arc<dyn PathProbe>) -> Self {
        self.probe = probe;
        self
    }

    /// Report progress to `observer` instead of `tracing`
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn ManifestObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Expand add/remove patterns with `options`
    #[must_use]
    pub fn with_match_options(mut self, options: MatchOptions) -> Self {
        self.match_options = options;
        self
    }

    /// Replace the in-memory paths with the content of the backing file.
    ///
    /// Every non-empty line becomes an active path; repeated lines collapse
    /// into one.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Io`] if the file cannot be opened or is not
    /// valid UTF-8. The in-memory paths are left untouched in that case.
    pub fn read(&mut self) -> Result<()> {
        let content = fs::read_to_string(&self.location)
            .map_err(|e| ManifestError::io(&self.location, e))?;

        self.paths = parse(&content);
        self.notify(ManifestEvent::Loaded {
            path: self.location.clone(),
            entries: self.paths.len(),
        });

        Ok(())
    }

    /// Backing file of this manifest
    #[must_use]
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Active paths in ascending order
    #[must_use]
    pub fn active_paths(&self) -> Vec<&str> {
        self.paths.iter().map(String::as_str).collect()
    }

    /// Whether `path` is active
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Number of active paths
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no path is active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Drop every active path that is missing or a directory.
    ///
    /// Paths are checked in ascending order. Returns how many were dropped;
    /// running it twice in a row drops nothing the second time.
    pub fn prune(&mut self) -> usize {
        let checked = self.paths.len();
        self.paths
            .retain(|path| self.probe.is_trackable(Path::new(path)));
        let stale = checked - self.paths.len();

        self.notify(ManifestEvent::Pruned { checked, stale });
        stale
    }

    /// Activate every path matching `pattern`, then prune.
    ///
    /// Returns how many matches were not active before. A match that turns
    /// out to be a directory, or vanished before the prune, does not stay
    /// active.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Pattern`] if `pattern` is not a valid glob;
    /// the manifest is unchanged in that case.
    pub fn add(&mut self, pattern: &str) -> Result<usize> {
        let matches = self.expand(pattern)?;

        let mut count = 0;
        for path in matches {
            if self.paths.insert(path) {
                count += 1;
            }
        }
        self.notify(ManifestEvent::Added { count });

        self.prune();
        Ok(count)
    }

    /// Deactivate every tracked path matching `pattern`, then prune.
    ///
    /// Matches that are not tracked are ignored. Returns how many active
    /// paths were dropped by the pattern itself.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Pattern`] if `pattern` is not a valid glob;
    /// the manifest is unchanged in that case.
    pub fn remove(&mut self, pattern: &str) -> Result<usize> {
        let matches = self.expand(pattern)?;

        let count = matches
            .iter()
            .filter(|path| self.paths.remove(path.as_str()))
            .count();
        self.notify(ManifestEvent::Removed { count });

        self.prune();
        Ok(count)
    }

    /// Text written by [`Self::save`]: each active path followed by `\n`
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.paths.iter().map(|p| p.len() + 1).sum());
        for path in &self.paths {
            out.push_str(path);
            out.push('\n');
        }
        out
    }

    /// Write the active paths to the backing file, creating missing parent
    /// directories first.
    ///
    /// The file is overwritten in place. A failed write leaves it in
    /// whatever state the write reached.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Io`] if a parent directory cannot be created
    /// or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.location.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| ManifestError::io(parent, e))?;
        }

        fs::write(&self.location, self.render())
            .map_err(|e| ManifestError::io(&self.location, e))?;

        self.notify(ManifestEvent::Saved {
            path: self.location.clone(),
            entries: self.paths.len(),
        });
        Ok(())
    }

    /// Expand `pattern` against the filesystem into manifest entries.
    ///
    /// Matches that cannot be read, or are not valid UTF-8, are reported and
    /// left out.
    fn expand(&self, pattern: &str) -> Result<Vec<String>> {
        let entries =
            glob::glob_with(pattern, self.match_options).map_err(|source| {
                ManifestError::Pattern {
                    pattern: pattern.to_string(),
                    source,
                }
            })?;

        let mut matches = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) => match path.into_os_string().into_string() {
                    Ok(path) if !path.is_empty() => matches.push(path),
                    Ok(_) => {}
                    Err(raw) => self.notify(ManifestEvent::Skipped {
                        path: PathBuf::from(raw),
                        reason: "path is not valid UTF-8".to_string(),
                    }),
                },
                Err(e) => self.notify(ManifestEvent::Skipped {
                    path: e.path().to_path_buf(),
                    reason: e.error().to_string(),
                }),
            }
        }

        self.notify(ManifestEvent::Expanded {
            pattern: pattern.to_string(),
            matches: matches.len(),
        });
        Ok(matches)
    }

    fn notify(&self, event: ManifestEvent) {
        self.observer.notify(&event);
    }
}

impl fmt::Debug for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manifest")
            .field("location", &self.location)
            .field("paths", &self.paths)
            .field("match_options", &self.match_options)
            .finish_non_exhaustive()
    }
}

/// Collect the non-empty lines of a manifest file
fn parse(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
