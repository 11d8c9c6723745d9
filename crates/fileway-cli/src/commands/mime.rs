//! Mime command implementation.

use crate::cli::MimeArgs;
use crate::error::add_path_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use fileway_core::file_content_type;

pub fn execute(args: &MimeArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let mime = add_path_context(file_content_type(&args.file), &args.file)?;

    formatter.format_value("mime", &mime)?;

    Ok(())
}
