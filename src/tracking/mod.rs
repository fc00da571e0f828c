//! Manifest engine: the set of tracked paths and the operations on it.
//!
//! # Architecture
//!
//! - [`crate::tracking::Manifest`] - Sorted set of active paths bound to a text file
//! - [`crate::tracking::PathProbe`] - Existence and directory checks used by pruning
//! - [`crate::tracking::ManifestObserver`] - Receives a [`ManifestEvent`] for every step
//!
//! Every mutating operation ends with a prune, so once it returns the
//! manifest holds no directories and no missing paths.
//!
//! # Usage
//!
//! ```no_run
//! use manifest_manager::tracking::Manifest;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut manifest = Manifest::load("build/manifest.txt")?;
//! manifest.add("dist/*.js")?;
//! manifest.remove("dist/*.map")?;
//! manifest.save()?;
//!
//! for path in manifest.active_paths() {
//!     println!("{path}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod events;
pub mod manifest;
pub mod probe;

pub use errors::ManifestError;
pub use events::{ManifestEvent, ManifestObserver, NullObserver, TracingObserver};
pub use manifest::Manifest;
pub use probe::{FsProbe, PathProbe};
