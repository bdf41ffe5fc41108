mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode {
            input,
            output,
            pretty,
        } => {
            commands::decode::handle(input.as_deref(), output.as_deref(), pretty)?;
        }

        Commands::Urls { input, verbose } => {
            commands::urls::handle(input.as_deref(), verbose)?;
        }
    }

    Ok(())
}
