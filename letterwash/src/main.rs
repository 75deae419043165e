// letterwash/src/main.rs
//! Letterwash entry point.
//!
//! Parses the CLI, initializes logging, reads letter content from a file or
//! stdin, applies the selected core operation, and prints the result (raw or
//! as a JSON report). Only the I/O here can fail; sanitization itself is
//! total and never errors.
//!
//! License: MIT OR APACHE 2.0

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use letterwash_core::{classify, sanitize_letter_html, strip_html_to_text, ContentKind};
use log::{debug, info};
use serde::Serialize;
use std::io::Read;

use cli::{Cli, Commands, InputArgs};

/// Machine-readable result wrapper for `--json`.
#[derive(Serialize)]
struct Report<'a> {
    input_len: usize,
    output_len: usize,
    kind: &'static str,
    output: &'a str,
}

fn init_logger(quiet: bool, debug: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .try_init();
}

fn read_input(args: &InputArgs) -> Result<String> {
    match &args.input {
        Some(path) => {
            debug!("Reading input from file: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file '{}'", path.display()))
        }
        None => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                bail!(
                    "No input file given and stdin is a terminal. \
                     Pipe letter content in, or pass a file path."
                );
            }
            debug!("Reading input from stdin...");
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("Failed to read letter content from stdin")?;
            Ok(buf)
        }
    }
}

fn kind_str(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Markup => "markup",
        ContentKind::Plain => "plain",
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logger(args.quiet, args.debug);
    info!("letterwash started. Version: {}", env!("CARGO_PKG_VERSION"));

    let input_args = match &args.command {
        Commands::Sanitize(input) | Commands::Strip(input) | Commands::Classify(input) => input,
    };
    let content = read_input(input_args)?;
    let kind = classify(&content);

    let output = match args.command {
        Commands::Sanitize(_) => sanitize_letter_html(&content),
        Commands::Strip(_) => strip_html_to_text(&content),
        Commands::Classify(_) => kind_str(kind).to_string(),
    };

    if args.json {
        let report = Report {
            input_len: content.len(),
            output_len: output.len(),
            kind: kind_str(kind),
            output: &output,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")?
        );
    } else {
        println!("{output}");
    }
    Ok(())
}
