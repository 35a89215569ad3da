//! Test utilities for childgen integration tests

// Internal imports (std, crate)
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// External imports (alphabetized)
use anyhow::Context;
use tempfile::TempDir;
use zip::ZipArchive;

/// Creates a temporary directory for test outputs
pub fn create_temp_dir() -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;
    let temp_path = temp_dir.path().to_path_buf();
    Ok((temp_dir, temp_path))
}

/// Runs the childgen binary with `args` and captures its output
pub fn run_childgen<I, S>(args: I) -> anyhow::Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_childgen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .context("Failed to execute childgen binary")
}

/// Reads every entry of a srcjar as `(name, content)` in archive order
pub fn read_srcjar(path: &Path) -> anyhow::Result<Vec<(String, String)>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open srcjar: {}", path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("Not a valid zip archive: {}", path.display()))?;

    let mut entries = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let mut content = String::new();
        entry.read_to_string(&mut content)?;
        entries.push((entry.name().to_string(), content));
    }
    Ok(entries)
}

/// Asserts that the srcjar entry `name` contains all of `contents`
pub fn assert_entry_contains(path: &Path, name: &str, contents: &[&str]) -> anyhow::Result<()> {
    let entries = read_srcjar(path)?;
    let (_, entry_content) = entries
        .iter()
        .find(|(entry_name, _)| entry_name == name)
        .ok_or_else(|| anyhow::anyhow!("Entry {} not found in {}", name, path.display()))?;

    let missing_contents: Vec<&str> = contents
        .iter()
        .copied()
        .filter(|expected| !entry_content.contains(expected))
        .collect();

    if !missing_contents.is_empty() {
        return Err(anyhow::anyhow!(
            "Entry {} is missing expected content:\n  {}",
            name,
            missing_contents.join("\n  ")
        ));
    }

    Ok(())
}
