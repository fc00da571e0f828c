use crate::ManagerContext;
use anyhow::Result;
use std::io::Write;

/// Write the active entries to `out`, one per line.
///
/// A missing manifest is created empty first, as for every other command,
/// but the manifest itself is never rewritten.
///
/// # Errors
///
/// Returns an error if the manifest cannot be opened or `out` cannot be
/// written.
pub fn execute(ctx: &ManagerContext, out: &mut impl Write) -> Result<()> {
    let manifest = ctx.open_or_init()?;

    writeln!(out, "{}", manifest.active_paths().join("\n"))?;
    out.flush()?;
    Ok(())
}
