// letterwash/src/cli.rs
//! Command-line interface definition for the letterwash binary.
//! License: MIT OR APACHE 2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "letterwash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sanitize user-authored letter markup for safe rendering",
    long_about = "Letterwash applies a restrictive HTML allowlist to user-authored letter content. \
Only b, i, u, s, span, br, and p tags survive, with at most a sanitized color style on span. \
It can also strip all markup for plain-text previews, or classify content as markup vs. plain text.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (logs every dropped tag and rejected style)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Emit a JSON report instead of the raw result
    #[arg(long, help = "Emit a JSON report (input_len, output_len, kind, output).")]
    pub json: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `letterwash` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes letter content, keeping only allowlisted markup.
    #[command(about = "Sanitizes letter content, keeping only allowlisted markup.")]
    Sanitize(InputArgs),

    /// Strips all markup and prints a plain-text preview.
    #[command(about = "Strips all markup and prints a plain-text preview.")]
    Strip(InputArgs),

    /// Classifies content as 'markup' or 'plain'.
    #[command(about = "Classifies content as 'markup' or 'plain'.")]
    Classify(InputArgs),
}

/// Shared input selection for all subcommands.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input file; reads stdin when omitted.
    #[arg(value_name = "FILE", help = "Input file; reads stdin when omitted.")]
    pub input: Option<PathBuf>,
}
