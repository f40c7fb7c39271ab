mod cli;
mod consts;
mod error;
mod math;
mod runner;
mod workdir;

use clap::Parser;

use cli::Cli;

fn main() {
    let _cli = Cli::parse();
    runner::run();
}
