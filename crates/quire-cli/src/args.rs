//! Command-line argument definitions for the Quire CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input markup, how its root is read,
//! the configuration file and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Quire document reader
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input DDL markup file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Read any single top-level construct instead of a `<document>`
    #[arg(long)]
    pub object: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
