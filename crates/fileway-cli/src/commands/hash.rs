//! Hash command implementation.

use crate::cli::HashAlgorithm;
use crate::cli::HashArgs;
use crate::error::add_path_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use fileway_core::file_hash;
use md5::Md5;
use sha2::Sha256;

pub fn execute(args: &HashArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let digest = match args.algorithm {
        HashAlgorithm::Md5 => file_hash::<Md5>(&args.file),
        HashAlgorithm::Sha256 => file_hash::<Sha256>(&args.file),
    };
    let digest = add_path_context(digest, &args.file)?;

    formatter.format_value("hash", &digest)?;

    Ok(())
}
