mod cli;
mod config;
mod convert;
mod dbt_cmd;
mod logging;
mod products_cmd;
mod seed_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Seed(args) => seed_cmd::run(args),
        Command::Products(args) => products_cmd::run(args),
        Command::Dbt(args) => dbt_cmd::run(args),
    }
}
