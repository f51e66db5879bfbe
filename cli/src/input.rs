use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Reads the password hashes of a file, one per line.
/// Empty lines are skipped.
pub fn read_passwords(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Could not open file {}", path.display()))?;

    Ok(parse_passwords(&contents))
}

fn parse_passwords(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
