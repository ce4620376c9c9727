//! # GitCode Viewer CLI
//!
//! This is the binary entry point for the `gitcode-viewer` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Handling top-level application errors and translating them into user-friendly
//!   output.
//!
//! The demo logic lives in the `gitcode_viewer` library crate; the binary is a
//! thin wrapper that wires it to stdout.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
