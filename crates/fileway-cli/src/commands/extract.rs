//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::add_path_context;
use crate::output;
use crate::output::OutputFormatter;
use anyhow::Result;
use fileway_core::extract;

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter, quiet: bool) -> Result<()> {
    let bar = output::spinner(quiet, "Extracting");
    let result = extract(&args.archive, &args.dest);
    bar.finish_and_clear();

    let report = add_path_context(result, &args.archive)?;
    formatter.format_extract_result(&args.dest, &report)?;

    Ok(())
}
