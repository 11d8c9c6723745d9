//! Copy command implementation.

use crate::cli::CopyArgs;
use crate::error::add_path_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use anyhow::bail;
use fileway_core::PathKind;
use fileway_core::classify;
use fileway_core::copy_dir;
use fileway_core::copy_file;

pub fn execute(args: &CopyArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let kind = add_path_context(classify(&args.source), &args.source)?;

    match kind {
        PathKind::Directory => {
            add_path_context(copy_dir(&args.source, &args.dest), &args.source)?;
        }
        PathKind::File => {
            add_path_context(copy_file(&args.source, &args.dest), &args.source)?;
        }
        PathKind::Missing => {
            bail!("No such file or directory: {}", args.source.display());
        }
    }

    formatter.format_value(
        "copy",
        &format!("{} -> {}", args.source.display(), args.dest.display()),
    )?;

    Ok(())
}
