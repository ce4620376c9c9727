//! # CLI Command Implementations
//!
//! Each subcommand of `gitcode-viewer` lives in its own file.
//!
//! ## Structure
//!
//! Most command modules contain:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - A `run` function that writes the command's transcript to any
//!   `io::Write`, so unit tests can capture it.
//! - An `execute` function that calls `run` with a locked stdout.

pub mod completions;
pub mod config;
pub mod export;
pub mod files;
pub mod repos;
pub mod sync;
pub mod tasks;
