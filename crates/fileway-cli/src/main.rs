//! Fileway CLI - pack, extract, copy, hash, and inspect files.

mod cli;
mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::Pack(args) => commands::pack::execute(args, &*formatter, cli.quiet),
        cli::Commands::Extract(args) => commands::extract::execute(args, &*formatter, cli.quiet),
        cli::Commands::Copy(args) => commands::copy::execute(args, &*formatter),
        cli::Commands::Hash(args) => commands::hash::execute(args, &*formatter),
        cli::Commands::Mime(args) => commands::mime::execute(args, &*formatter),
        cli::Commands::Stat(args) => commands::stat::execute(args, &*formatter),
        cli::Commands::Completion(args) => commands::completion::execute(args),
    }
}
