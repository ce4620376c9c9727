//! # Export Command Implementation
//!
//! Builds the mock repository database and writes it as JSON.

use anyhow::Result;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::PathBuf;

use gitcode_viewer::catalog::RepoCatalog;
use gitcode_viewer::defaults::DEFAULT_EXPORT_FILENAME;
use gitcode_viewer::export::export_json;
use gitcode_viewer::suggestions;

/// Export the mock repository database as JSON
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Path of the JSON file to write
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_EXPORT_FILENAME
    )]
    pub output: PathBuf,

    /// Seed for generated repository sizes (random when omitted)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

/// Execute the `export` command.
pub fn execute(args: ExportArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(args, &mut out)
}

pub fn run(args: ExportArgs, out: &mut dyn Write) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let catalog = RepoCatalog::demo(&mut rng);

    export_json(&catalog, &args.output)
        .map_err(|e| suggestions::export_not_written(&args.output, e))?;

    writeln!(
        out,
        "Exported {} repositories to {}",
        catalog.len(),
        args.output.display()
    )?;
    Ok(())
}
