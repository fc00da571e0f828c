use crate::ManagerContext;
use anyhow::{Context, Result};
use tracing::debug;

/// Stop tracking every path matching `pattern`, then drop stale entries
/// and save.
///
/// Only paths that still exist can match a glob; entries whose files are
/// already gone are taken care of by the prune. Returns how many tracked
/// paths matched.
///
/// # Errors
///
/// Returns an error if:
/// - The manifest cannot be opened or saved
/// - `pattern` is not a valid glob
pub fn execute(ctx: &ManagerContext, pattern: &str) -> Result<usize> {
    let mut manifest = ctx.open_or_init()?;
    debug!(paths = ?manifest.active_paths(), "parsed");

    let removed = manifest.remove(pattern).context("manifest delete issue")?;

    debug!(paths = ?manifest.active_paths(), "modified");
    manifest.save().context("manifest save issue")?;

    Ok(removed)
}
