//! Command-line argument definitions for the doxyplant CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments control the model input location,
//! the output path, the inheritance-edge toggle, and logging
//! verbosity.

use clap::Parser;

/// Command-line arguments for the doxyplant converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base directory under which the xml/ subdirectory holds the
    /// Doxygen XML input; defaults to the executable's own directory
    #[arg(help = "Base directory containing the xml/ model input")]
    pub input: Option<String>,

    /// Path to the output PlantUML file
    #[arg(short, long, default_value = "output.puml")]
    pub output: String,

    /// Also emit inheritance-graph edges (off by default; the
    /// collaboration graphs usually restate them)
    #[arg(long)]
    pub inheritance: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
