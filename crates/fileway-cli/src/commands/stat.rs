//! Stat command implementation.

use crate::cli::StatArgs;
use crate::error::add_path_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use fileway_core::PathKind;
use fileway_core::classify;

pub fn execute(args: &StatArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let kind = add_path_context(classify(&args.path), &args.path)?;

    let label = match kind {
        PathKind::Missing => "missing",
        PathKind::Directory => "directory",
        PathKind::File => "file",
    };
    formatter.format_value("stat", label)?;

    Ok(())
}
