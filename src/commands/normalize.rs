use crate::ManagerContext;
use anyhow::{Context, Result};

/// Rewrite the manifest sorted, deduplicated and without blank lines.
///
/// This is what runs when no operation is selected. Entries are not
/// checked against the filesystem.
///
/// # Errors
///
/// Returns an error if the manifest cannot be opened or saved.
pub fn execute(ctx: &ManagerContext) -> Result<()> {
    let manifest = ctx.open_or_init()?;
    manifest.save().context("manifest save issue")?;
    Ok(())
}
