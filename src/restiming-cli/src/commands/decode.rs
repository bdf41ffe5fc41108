//! Beacon decode command handler

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::read_beacon;

pub fn handle(input: Option<&Path>, output: Option<&Path>, pretty: bool) -> Result<()> {
    let beacon = read_beacon(input)?;
    let resources = restiming::decompress_json(&beacon).context("Failed to decompress beacon")?;

    let json = if pretty {
        serde_json::to_string_pretty(&resources)?
    } else {
        serde_json::to_string(&resources)?
    };

    match output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write records to {}", path.display()))?,
        None => println!("{}", json),
    }

    Ok(())
}
