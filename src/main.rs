//! # Datascrub command-line entry point
//!
//! ```bash
//! datascrub                                 # Asm2_Data.csv -> Asm2_Cleaned_Data.csv
//! datascrub raw.csv -o clean.csv --quiet    # status lines only
//! datascrub raw.csv --config cleaning.json  # custom columns, pattern, fences
//! ```
//!
//! Exits normally when the input cannot be read (after printing a diagnostic) and
//! when the output cannot be written. Only startup problems, such as an invalid
//! config file, produce an error exit.

#![warn(clippy::all, rust_2018_idioms)]

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    // Set RUST_LOG=debug to see per-stage diagnostics
    datascrub::logging::init();

    let cli = cli::Cli::parse();
    cli::run(&cli)
}
