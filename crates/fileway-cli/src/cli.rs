//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fileway")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pack a file or directory into a zip archive
    Pack(PackArgs),
    /// Extract a zip archive into a new directory
    Extract(ExtractArgs),
    /// Copy a file or directory tree
    Copy(CopyArgs),
    /// Print a file's hex digest
    Hash(HashArgs),
    /// Guess a file's MIME type from its leading bytes
    Mime(MimeArgs),
    /// Report whether a path is a file, a directory, or absent
    Stat(StatArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct PackArgs {
    /// Output archive file path
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Source file or directory to pack
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Destination directory (created by the command, must not exist)
    #[arg(value_name = "DEST")]
    pub dest: PathBuf,
}

#[derive(clap::Args)]
pub struct CopyArgs {
    /// Source file or directory
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Destination path
    #[arg(value_name = "DEST")]
    pub dest: PathBuf,
}

#[derive(clap::Args)]
pub struct HashArgs {
    /// File to hash
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Digest algorithm
    #[arg(short, long, value_enum, default_value_t = HashAlgorithm::Sha256)]
    pub algorithm: HashAlgorithm,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HashAlgorithm {
    Md5,
    Sha256,
}

#[derive(clap::Args)]
pub struct MimeArgs {
    /// File to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(clap::Args)]
pub struct StatArgs {
    /// Path to classify
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
