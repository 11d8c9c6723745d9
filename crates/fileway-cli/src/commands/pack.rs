//! Pack command implementation.

use crate::cli::PackArgs;
use crate::error::add_path_context;
use crate::output;
use crate::output::OutputFormatter;
use anyhow::Result;
use anyhow::bail;
use fileway_core::PathKind;
use fileway_core::classify;
use fileway_core::pack_dir;
use fileway_core::pack_file;

pub fn execute(args: &PackArgs, formatter: &dyn OutputFormatter, quiet: bool) -> Result<()> {
    let kind = add_path_context(classify(&args.source), &args.source)?;

    let bar = output::spinner(quiet, "Packing");
    let report = match kind {
        PathKind::Directory => {
            add_path_context(pack_dir(&args.source, &args.archive), &args.source)
        }
        PathKind::File => add_path_context(pack_file(&args.source, &args.archive), &args.source),
        PathKind::Missing => {
            bar.finish_and_clear();
            bail!("No such file or directory: {}", args.source.display());
        }
    };
    bar.finish_and_clear();

    let report = report?;
    formatter.format_pack_result(&args.archive, &report)?;

    Ok(())
}
