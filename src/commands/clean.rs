use crate::ManagerContext;
use anyhow::{Context, Result};
use tracing::debug;

/// Drop entries whose path no longer exists or is a directory, then save.
///
/// Returns how many entries were dropped.
///
/// # Errors
///
/// Returns an error if the manifest cannot be opened or saved.
pub fn execute(ctx: &ManagerContext) -> Result<usize> {
    let mut manifest = ctx.open_or_init()?;
    debug!(paths = ?manifest.active_paths(), "parsed");

    let stale = manifest.prune();

    debug!(paths = ?manifest.active_paths(), "modified");
    manifest.save().context("manifest save issue")?;

    Ok(stale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_utils::fixtures::MockTree;
    use std::fs;

    #[test]
    fn test_clean_removes_stale_entries() -> Result<()> {
        let tree = MockTree::new()?;
        fs::write(
            tree.manifest_path(),
            format!(
                "{}\n{}\n{}\n",
                tree.entry("files/one.txt"),
                tree.entry("files/dne.bin"),
                tree.entry("files/a-path"),
            ),
        )?;
        let ctx = ManagerContext::with_config(tree.manifest_path(), Config::default());

        assert_eq!(execute(&ctx)?, 2);
        assert_eq!(
            fs::read_to_string(tree.manifest_path())?,
            format!("{}\n", tree.entry("files/one.txt"))
        );

        // Nothing left to clean
        assert_eq!(execute(&ctx)?, 0);
        Ok(())
    }
}
