//! Subcommand handlers

pub mod decode;
pub mod urls;

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read beacon JSON from a file, or from stdin when no path is given.
fn read_beacon(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read beacon file {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read beacon from stdin")?;
            Ok(buffer)
        }
    }
}
