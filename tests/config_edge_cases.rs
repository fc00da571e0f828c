use anyhow::Result;
use predicates::prelude::*;

mod common;
use common::TestTree;

#[test]
fn test_config_case_insensitive_glob() -> Result<()> {
    let tree = TestTree::new()?;
    tree.write("config.toml", "[glob]\ncase_sensitive = false\n")?;

    tree.cmd()?
        .args(["manifest.txt", "-a", "files/*.TXT"])
        .assert()
        .success();

    assert_eq!(tree.read("manifest.txt")?, "files/one.txt\n");
    Ok(())
}

#[test]
fn test_config_literal_leading_dot() -> Result<()> {
    let tree = TestTree::new()?;
    tree.write("files/.hidden", "secret")?;

    tree.cmd()?
        .args(["all.txt", "-a", "files/*"])
        .assert()
        .success();
    assert!(tree.read("all.txt")?.contains("files/.hidden\n"));

    tree.write("config.toml", "[glob]\nrequire_literal_leading_dot = true\n")?;
    tree.cmd()?
        .args(["visible.txt", "-a", "files/*"])
        .assert()
        .success();
    assert!(!tree.read("visible.txt")?.contains(".hidden"));
    Ok(())
}

#[test]
fn test_config_log_level() -> Result<()> {
    let tree = TestTree::new()?;
    tree.write("config.toml", "[log]\nlevel = \"off\"\n")?;

    tree.cmd()?
        .args(["manifest.txt", "-a", "files/*"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    // The environment overrides the file
    tree.cmd()?
        .env("LOGLEVEL", "info")
        .args(["manifest.txt", "-c"])
        .assert()
        .success()
        .stderr(predicate::str::contains("manifest saved"));
    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let tree = TestTree::new()?;
    tree.write("config.toml", "[log]\nlevel = 3\n")?;

    tree.cmd()?
        .args(["manifest.txt", "-l"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));

    assert!(!tree.path().join("manifest.txt").exists());
    Ok(())
}
