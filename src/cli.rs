//! CLI argument definitions
//!
//! The program takes no operational arguments; clap still provides
//! `--help`/`--version` and rejects anything unexpected.

use clap::Parser;

#[derive(Parser)]
#[command(name = "hellosys")]
#[command(
    about = "Print a hello banner with the current time, working directory, and a sample calculation",
    version
)]
pub(crate) struct Cli {}
