use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads a puzzle input file into its lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Splits lines into blank-line-separated groups of integers. Any
/// non-blank line that is not an integer aborts the whole parse.
pub fn numeric_groups(lines: &[String]) -> Result<Vec<Vec<u64>>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();
    for line in lines {
        if line.is_empty() {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
            continue;
        }
        let value = line
            .parse::<u64>()
            .with_context(|| format!("not a number: {line:?}"))?;
        current.push(value);
    }
    if !current.is_empty() {
        groups.push(current);
    }
    Ok(groups)
}
