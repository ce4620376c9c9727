//! CLI argument parsing, logging setup and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use gitcode_viewer::output::OutputConfig;

use crate::commands;

/// GitCode Viewer - mock repository viewer and task manager demos
#[derive(Parser, Debug)]
#[command(name = "gitcode-viewer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        env = "GITCODE_LOG",
        default_value = "warn"
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the mock repository database, simulate clones and save settings
    Repos(commands::repos::ReposArgs),

    /// Sync a few mock repositories, then search them by name
    Sync(commands::sync::SyncArgs),

    /// List repository files and sort them by size on a background thread
    Files(commands::files::FilesArgs),

    /// Create tasks in the in-memory task manager and count them
    Tasks(commands::tasks::TasksArgs),

    /// Write the viewer settings file
    Config(commands::config::ConfigArgs),

    /// Export the mock repository database as JSON
    Export(commands::export::ExportArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);
        log::debug!("Output config: {:?}", output);

        match self.command {
            Commands::Repos(args) => commands::repos::execute(args, &output),
            Commands::Sync(args) => commands::sync::execute(args, &output),
            Commands::Files(args) => commands::files::execute(args, &output),
            Commands::Tasks(args) => commands::tasks::execute(args),
            Commands::Config(args) => commands::config::execute(args),
            Commands::Export(args) => commands::export::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Route `log` records to stderr so stdout carries only command output.
///
/// `level` accepts anything `env_logger` filters do, e.g. `info` or
/// `gitcode_viewer=debug`.
fn init_logging(level: &str) {
    let _ = env_logger::Builder::new()
        .parse_filters(level)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
