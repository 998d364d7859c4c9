// tests/common/mod.rs
//
// Git fixture helpers shared by the integration tests. Fixtures run the real
// git binary with the host configuration masked out, so results do not depend
// on the developer's global settings.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{ensure, Context, Result};
use tempfile::TempDir;

/// Run one git command in `dir` and return its trimmed stdout
pub fn git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .output()
        .with_context(|| format!("running git {:?}", args))?;
    ensure!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Work tree with one commit tagged `tag`, pushed to a local bare upstream
///
/// Returns the owning temp dir together with the work tree path. Dropping
/// the temp dir removes both repositories.
pub fn released_fixture_with_tag(tag: &str) -> Result<(TempDir, PathBuf)> {
    let root = TempDir::new().context("creating fixture dir")?;
    let upstream = root.path().join("upstream.git");
    let work = root.path().join("work");
    fs::create_dir(&work)?;

    git(root.path(), &["init", "--bare", "upstream.git"])?;
    git(&work, &["init"])?;
    git(&work, &["config", "user.name", "Fixture"])?;
    git(&work, &["config", "user.email", "fixture@example.com"])?;

    fs::write(work.join("README.md"), "fixture\n")?;
    git(&work, &["add", "README.md"])?;
    git(&work, &["commit", "-m", "initial commit"])?;
    git(&work, &["tag", tag])?;
    git(&work, &["remote", "add", "origin", upstream.to_str().unwrap()])?;
    git(&work, &["push", "-u", "origin", "HEAD"])?;

    Ok((root, work))
}

/// Work tree tagged v2.11.2, pushed, with a clean tree
pub fn released_fixture() -> Result<(TempDir, PathBuf)> {
    released_fixture_with_tag("v2.11.2")
}

/// Work tree with one commit but no tags and no upstream
pub fn untagged_fixture() -> Result<(TempDir, PathBuf)> {
    let root = TempDir::new().context("creating fixture dir")?;
    let work = root.path().join("work");
    fs::create_dir(&work)?;

    git(&work, &["init"])?;
    git(&work, &["config", "user.name", "Fixture"])?;
    git(&work, &["config", "user.email", "fixture@example.com"])?;

    fs::write(work.join("README.md"), "fixture\n")?;
    git(&work, &["add", "README.md"])?;
    git(&work, &["commit", "-m", "initial commit"])?;

    Ok((root, work))
}

/// Stage and commit every pending change in the work tree
pub fn commit_all(work: &Path, message: &str) -> Result<()> {
    git(work, &["add", "-A"])?;
    git(work, &["commit", "-m", message])?;
    Ok(())
}
