use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    #[clap(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a single variant into its 64 bit key
    Encode {
        /// Chromosome name (e.g. "1", "X", "chrM")
        #[clap(value_parser)]
        chrom: String,

        /// 0-based reference position
        #[clap(value_parser)]
        pos: u32,

        /// Reference allele; pass "" for an insertion
        #[clap(value_parser)]
        reference: String,

        /// Alternate allele; pass "" for a deletion
        #[clap(value_parser)]
        alternate: String,
    },

    /// Decode hexadecimal variant keys back into their fields
    Decode {
        /// Keys to decode, as 16 digit hexadecimal strings
        #[clap(required = true, value_parser)]
        keys: Vec<String>,
    },

    /// Encode a TSV file of variants, one `chrom pos ref alt` record
    /// per line
    EncodeFile {
        /// Input TSV file path
        #[clap(value_parser)]
        input: PathBuf,

        /// Output file path; the standard output when omitted
        #[clap(short, long, value_parser)]
        output: Option<PathBuf>,

        /// Sort the keys in ascending order before writing
        #[clap(long, value_parser)]
        sort: bool,
    },
}
