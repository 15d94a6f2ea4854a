//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "packtally")]
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
    /// Archive a file or folder and write a compression log
    Pack(PackArgs),
    /// Print compression statistics for an existing archive
    Stats(StatsArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct PackArgs {
    /// File or folder to archive
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory where the archive and log are written
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub archive_root: PathBuf,

    /// Compression level (1-9)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(1..=9))]
    pub compression_level: Option<u8>,

    /// Fail instead of skipping entries whose stored size is zero
    #[arg(long)]
    pub fail_on_zero_stored: bool,
}

#[derive(clap::Args)]
pub struct StatsArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Fail instead of skipping entries whose stored size is zero
    #[arg(long)]
    pub fail_on_zero_stored: bool,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
