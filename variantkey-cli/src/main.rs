use anyhow::Context;
use clap::Parser;
use human_panic::setup_panic;

use crate::cli::{Cli, Commands};
use crate::logging::init_logging;

mod cli;
mod cmd;
mod logging;

fn main() -> anyhow::Result<()> {
    setup_panic!();

    let cli: Cli = Cli::parse();

    init_logging(cli.verbose.log_level_filter()).expect("Could not initialize logging");

    match &cli.command {
        Commands::Encode {
            chrom,
            pos,
            reference,
            alternate,
        } => {
            cmd::encode::encode(chrom, *pos, reference, alternate);
        }
        Commands::Decode { keys } => {
            cmd::decode::decode(keys).context("Failed to decode given keys")?;
        }
        Commands::EncodeFile {
            input,
            output,
            sort,
        } => {
            cmd::encode_file::encode_file(input, output.as_deref(), *sort)
                .context("Failed to encode given variant file")?;
        }
    }

    Ok(())
}
