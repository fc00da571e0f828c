#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory laid out like a small project
///
/// ```text
/// files/one.txt
/// files/two.out
/// files/three.log
/// files/a-path/
/// ```
pub struct TestTree {
    pub temp_dir: TempDir,
}

impl TestTree {
    pub fn new() -> Result<Self> {
        let tree = Self {
            temp_dir: TempDir::new()?,
        };
        tree.write("files/one.txt", "one")?;
        tree.write("files/two.out", "two")?;
        tree.write("files/three.log", "three")?;
        fs::create_dir_all(tree.path().join("files/a-path"))?;
        Ok(tree)
    }

    /// Get the temporary directory path
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn read(&self, name: &str) -> Result<String> {
        Ok(fs::read_to_string(self.path().join(name))?)
    }

    /// The binary, run from the tree root with a private (absent) config
    pub fn cmd(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("manifest-manager")?;
        cmd.current_dir(self.path())
            .env("MANIFEST_MANAGER_CONFIG", self.path().join("config.toml"))
            .env_remove("MANIFEST_LOG")
            .env_remove("LOGLEVEL");
        Ok(cmd)
    }
}
