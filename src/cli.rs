//! Command-line interface definitions for manifest-manager.
//!
//! The CLI definitions are shared between the main binary and the xtask
//! that renders the man page.
//!
//! Note: Field-level documentation is provided via clap attributes, so we
//! allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use crate::commands::Operation;
use clap::builder::NonEmptyStringValueParser;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Main CLI structure for manifest-manager.
#[derive(Parser, Debug)]
#[command(
    name = "manifest-manager",
    version = crate::VERSION,
    about = "A utility to help in the generation and maintenance of manifest files",
    long_about = "Keeps a sorted, deduplicated list of file paths up to date. Paths are \
                  added or removed by glob pattern; entries whose file is gone, or that \
                  point at a directory, are dropped on every change."
)]
#[command(group(
    ArgGroup::new("operation")
        .args(["add", "delete", "clean", "list"])
        .multiple(false)
))]
pub struct Cli {
    /// Path to the manifest file (created empty if missing)
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Add all files matching the glob to the target manifest
    #[arg(short, long, value_name = "GLOB", value_parser = NonEmptyStringValueParser::new())]
    pub add: Option<String>,

    /// Remove all files matching the glob from the target manifest
    #[arg(short, long, value_name = "GLOB", value_parser = NonEmptyStringValueParser::new())]
    pub delete: Option<String>,

    /// Clean up the file by removing all paths in it that do not exist
    #[arg(short, long)]
    pub clean: bool,

    /// Show the content of the manifest file
    #[arg(short, long)]
    pub list: bool,

    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The operation selected by the flags; no flag means normalize.
    #[must_use]
    pub fn operation(&self) -> Operation {
        if let Some(pattern) = &self.add {
            Operation::Add(pattern.clone())
        } else if let Some(pattern) = &self.delete {
            Operation::Delete(pattern.clone())
        } else if self.clean {
            Operation::Clean
        } else if self.list {
            Operation::List
        } else {
            Operation::Normalize
        }
    }
}
