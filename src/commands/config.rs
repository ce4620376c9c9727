//! # Config Command Implementation
//!
//! Writes the viewer settings file on its own. Unlike the `repos`
//! walkthrough, a failed write here is an error and exits non-zero.

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

use gitcode_viewer::defaults::DEFAULT_SETTINGS_FILENAME;
use gitcode_viewer::settings::Settings;
use gitcode_viewer::suggestions;

/// Write the viewer settings file
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Path of the settings file to write
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "GITCODE_CONFIG",
        default_value = DEFAULT_SETTINGS_FILENAME
    )]
    pub output: PathBuf,
}

/// Execute the `config` command.
pub fn execute(args: ConfigArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(args, &mut out)
}

pub fn run(args: ConfigArgs, out: &mut dyn Write) -> Result<()> {
    Settings::default()
        .write_ini(&args.output)
        .map_err(|e| suggestions::settings_not_written(&args.output, e))?;

    writeln!(
        out,
        "[Config] Configuration saved successfully to {}.",
        args.output.display()
    )?;
    Ok(())
}
