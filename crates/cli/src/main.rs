//! Essay Graph CLI
//!
//! Loads a serialized argument graph and prints its explanation chunks.
//!
//! ## Commands
//!
//! - `chunks` - One chunk per important node, in essay order
//! - `subgraph` - Linearized upstream or downstream subgraph of one node
//! - `stats` - Node, edge and important-node counts
//! - `validate` - Load the document and report problems

use anyhow::Result;
use clap::Parser;

mod cli;
mod command;
mod config;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(err) = run(cli) {
        log::error!("{err:#}");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::CliConfig::resolve(cli.config.as_deref(), cli.format)?;
    let output = command::execute(&cli.command, &config)?;
    println!("{output}");
    Ok(())
}
