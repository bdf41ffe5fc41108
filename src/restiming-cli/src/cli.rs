//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "restiming", version, about = "Decompress resource timing beacons")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decompress a beacon into resource timing records
    Decode {
        /// Beacon JSON file (stdin when omitted)
        input: Option<PathBuf>,

        /// Write records to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List the resource URLs contained in a beacon
    Urls {
        /// Beacon JSON file (stdin when omitted)
        input: Option<PathBuf>,

        /// Also show initiator type and start time
        #[arg(short, long)]
        verbose: bool,
    },
}
