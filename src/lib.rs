#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # Manifest Manager - Glob-Driven Manifest Files
//!
//! A manifest is a plain-text file listing one path per line, sorted and
//! without duplicates. `manifest-manager` keeps such files up to date:
//! paths are added or removed by glob pattern, and entries whose target
//! disappeared (or turned into a directory) are pruned.
//!
//! ## Architecture
//!
//! - [`tracking`]: The manifest engine (load, save, add, remove, prune, list)
//! - [`commands`]: One function per CLI operation, each a load/mutate/save cycle
//! - [`config`]: Optional TOML configuration (log level, glob options)
//! - [`logging`]: `tracing` subscriber setup
//! - [`cli`]: Command-line argument definitions
//!
//! ## Example Usage
//!
//! ```no_run
//! use manifest_manager::{ManagerContext, commands};
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = ManagerContext::new("dist/manifest.txt")?;
//!
//! commands::add::execute(&ctx, "dist/**/*.js")?;
//! commands::clean::execute(&ctx)?;
//! commands::list::execute(&ctx, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Command implementations driven by the CLI.
pub mod commands;

/// Configuration loading and defaults.
pub mod config;

/// Logging subscriber setup.
pub mod logging;

/// Manifest engine: tracked paths, path probe, events and errors.
pub mod tracking;


use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;
use tracking::{FsProbe, Manifest, PathProbe};

/// Current version of the manifest-manager binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything a command needs: which manifest to work on and how.
///
/// # Examples
///
/// ```no_run
/// use manifest_manager::ManagerContext;
/// use manifest_manager::config::Config;
///
/// # fn main() -> anyhow::Result<()> {
/// // Config discovered from $MANIFEST_MANAGER_CONFIG or the config directory
/// let ctx = ManagerContext::new("manifest.txt")?;
///
/// // Explicit config (for testing)
/// let ctx = ManagerContext::with_config("manifest.txt", Config::default());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ManagerContext {
    /// Path of the manifest file.
    pub manifest_path: PathBuf,

    /// Loaded configuration settings.
    pub config: config::Config,
}

impl ManagerContext {
    /// Creates a context for `manifest_path`, discovering the config file.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn new(manifest_path: impl Into<PathBuf>) -> Result<Self> {
        let config = config::Config::discover()?;
        Ok(Self::with_config(manifest_path, config))
    }

    /// Creates a context with an explicit configuration.
    #[must_use]
    pub fn with_config(manifest_path: impl Into<PathBuf>, config: config::Config) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            config,
        }
    }

    /// Path of the manifest file.
    #[must_use]
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// An empty, not yet loaded manifest configured from this context.
    #[must_use]
    pub fn manifest(&self) -> Manifest {
        Manifest::new(&self.manifest_path).with_match_options(self.config.glob.match_options())
    }

    /// Loads the manifest, first writing an empty one if the file does not
    /// exist yet.
    ///
    /// # Errors
    /// Returns an error if the empty manifest cannot be written or the file
    /// cannot be parsed (for example because the path is a directory).
    pub fn open_or_init(&self) -> Result<Manifest> {
        let mut manifest = self.manifest();

        if !FsProbe.exists(&self.manifest_path) {
            manifest
                .save()
                .context("manifest initialization issue")?;
            info!(path = %self.manifest_path.display(), "created empty manifest");
        }

        manifest.read().context("manifest file parsing issue")?;
        Ok(manifest)
    }
}
