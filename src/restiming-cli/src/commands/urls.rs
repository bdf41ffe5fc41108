//! URL listing command handler

use anyhow::{Context, Result};
use std::path::Path;

use super::read_beacon;

pub fn handle(input: Option<&Path>, verbose: bool) -> Result<()> {
    let beacon = read_beacon(input)?;
    let resources = restiming::decompress_json(&beacon).context("Failed to decompress beacon")?;

    for resource in &resources {
        if verbose {
            println!(
                "{:<16} {:>8}ms  {}",
                resource.initiator_type, resource.start_time, resource.name
            );
        } else {
            println!("{}", resource.name);
        }
    }

    Ok(())
}
