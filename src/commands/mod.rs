//! One module per manifest operation.
//!
//! Every mutating command runs the same cycle: open (creating an empty
//! manifest file if needed), apply exactly one operation, save. `list` is
//! read-only and never saves.

pub mod add;
pub mod clean;
pub mod list;
pub mod normalize;
pub mod rm;

use crate::ManagerContext;
use anyhow::Result;
use std::io::Write;

/// The single operation selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Track every path matching the glob
    Add(String),
    /// Stop tracking every path matching the glob
    Delete(String),
    /// Drop entries that no longer exist
    Clean,
    /// Print the active entries
    List,
    /// Rewrite the file sorted and deduplicated
    Normalize,
}

/// Run `operation` against the manifest of `ctx`; `list` output goes to `out`.
///
/// # Errors
///
/// Returns an error if the manifest cannot be opened or saved, the glob is
/// invalid, or `out` cannot be written.
pub fn execute(ctx: &ManagerContext, operation: &Operation, out: &mut impl Write) -> Result<()> {
    match operation {
        Operation::Add(pattern) => add::execute(ctx, pattern).map(drop),
        Operation::Delete(pattern) => rm::execute(ctx, pattern).map(drop),
        Operation::Clean => clean::execute(ctx).map(drop),
        Operation::List => list::execute(ctx, out),
        Operation::Normalize => normalize::execute(ctx),
    }
}
