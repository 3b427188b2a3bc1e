//! Command-line argument definitions for the Slugline CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input and output paths, the
//! output format, numbering, configuration file selection, and logging
//! verbosity.

use clap::{Parser, ValueEnum};

use slugline::editor::ExportFormat;

/// Output formats selectable on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Formatted screenplay view (HTML fragment)
    #[default]
    Html,
    /// Scene cards (HTML fragment)
    Cards,
    /// Paginated plain text
    Text,
    /// One text file per scene, written into the output directory
    Scenes,
    /// Classified elements as JSON
    Json,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Html => ExportFormat::Html,
            Format::Cards => ExportFormat::Cards,
            Format::Text => ExportFormat::Text,
            Format::Scenes => ExportFormat::Scenes,
            Format::Json => ExportFormat::Json,
        }
    }
}

/// Command-line arguments for the Slugline screenplay tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input screenplay, or a `.toml` project file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Output path; `-` writes to stdout. For `scenes`, a directory
    #[arg(short, long, default_value = "-")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Leave scene headings unnumbered
    #[arg(long)]
    pub no_scene_numbers: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
