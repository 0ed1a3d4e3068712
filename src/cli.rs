//! Command-line interface implementation for scribe.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::README_FILE;

/// Command-line arguments structure for scribe.
#[derive(Parser, Debug)]
#[command(author, version, about = "scribe: README generation and maintenance tool", long_about = None)]
pub struct Args {
    /// Target README file
    #[arg(value_name = "FILE", default_value = README_FILE)]
    pub file: PathBuf,

    /// Update version markers in an existing README from Cargo.toml
    /// instead of regenerating the document
    #[arg(short = 's', long)]
    pub sync_version: bool,

    /// With --sync-version, also update the parent directory's README
    /// when its content matches the target
    #[arg(short, long, requires = "sync_version")]
    pub parent: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
pub fn get_args() -> Args {
    Args::parse()
}
