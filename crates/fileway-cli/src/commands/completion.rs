//! Completion command implementation.

use crate::cli::Cli;
use crate::cli::CompletionArgs;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;

pub fn execute(args: &CompletionArgs) -> Result<()> {
    let mut command = Cli::command();
    generate(args.shell, &mut command, "fileway", &mut std::io::stdout());
    Ok(())
}
