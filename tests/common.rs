//! Shared test utilities for integration tests.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Writes a TOML settings file into `dir` and returns its path.
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_settings(dir: &Path, content: &str) -> Result<PathBuf> {
    let path = dir.join("site.toml");
    std::fs::write(&path, content)?;
    Ok(path)
}

/// Runs the generator binary through cargo with the given arguments.
///
/// # Errors
///
/// Returns error if cargo cannot be spawned
pub fn run_generator(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO"))
        .args(["run", "--quiet", "--manifest-path"])
        .arg(Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml"))
        .arg("--")
        .args(args)
        .output()?;
    Ok(output)
}
