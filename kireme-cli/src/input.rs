//! Input collection

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Read every input file in order, or standard input when `files` is empty.
pub fn read_all(files: &[PathBuf]) -> Result<Vec<String>> {
    if files.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read standard input")?;
        return Ok(vec![text]);
    }
    files
        .iter()
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))
        })
        .collect()
}
