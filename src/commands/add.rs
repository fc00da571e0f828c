use crate::ManagerContext;
use anyhow::{Context, Result};
use tracing::debug;

/// Track every path matching `pattern`, then drop stale entries and save.
///
/// Returns how many paths became active; directories among the matches
/// are pruned right away and do not count once saved.
///
/// # Errors
///
/// Returns an error if:
/// - The manifest cannot be opened or saved
/// - `pattern` is not a valid glob
pub fn execute(ctx: &ManagerContext, pattern: &str) -> Result<usize> {
    let mut manifest = ctx.open_or_init()?;
    debug!(paths = ?manifest.active_paths(), "parsed");

    let added = manifest.add(pattern).context("manifest add issue")?;

    debug!(paths = ?manifest.active_paths(), "modified");
    manifest.save().context("manifest save issue")?;

    Ok(added)
}
