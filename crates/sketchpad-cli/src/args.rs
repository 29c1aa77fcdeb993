//! Command-line argument definitions for the Sketchpad CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the scale factor, output destination,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Sketchpad demonstration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Scale factor applied to the scene (overrides the configuration)
    #[arg(short, long, allow_negative_numbers = true)]
    pub scale: Option<f32>,

    /// Path to write the drawing transcript to (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
