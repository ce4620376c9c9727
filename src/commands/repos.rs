//! # Repos Command Implementation
//!
//! The `repos` subcommand is the viewer walkthrough:
//!
//! 1. Print the banner and build the five mock repositories.
//! 2. Print each repository's details and, depending on `--clone`, simulate
//!    cloning it.
//! 3. Write the settings file. A failed write is reported on stderr and the
//!    run still finishes successfully.

use anyhow::Result;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::PathBuf;

use gitcode_viewer::catalog::{format_kib, RepoCatalog};
use gitcode_viewer::clone::{ClonePolicy, CloneSimulator, DEFAULT_CLONE_STEPS};
use gitcode_viewer::defaults::{millis, APP_NAME, APP_VERSION, DEFAULT_SETTINGS_FILENAME};
use gitcode_viewer::output::OutputConfig;
use gitcode_viewer::settings::Settings;

const BANNER_RULE: &str = "=======================================";
const DETAIL_RULE: &str = "---------------------------------------";

/// Show the mock repository database, simulate clones and save settings
#[derive(Args, Debug)]
pub struct ReposArgs {
    /// Seed for generated sizes and clone decisions (random when omitted)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Which repositories to clone
    #[arg(long, value_enum, default_value = "random")]
    pub clone: ClonePolicy,

    /// Delay between clone progress steps, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 0)]
    pub step_delay_ms: u64,

    /// Settings file written at the end of the run
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "GITCODE_CONFIG",
        default_value = DEFAULT_SETTINGS_FILENAME
    )]
    pub output: PathBuf,

    /// Do not write the settings file
    #[arg(long)]
    pub no_config: bool,

    /// Also list the repositories by size, largest first
    #[arg(long)]
    pub by_size: bool,
}

/// Execute the `repos` command.
pub fn execute(args: ReposArgs, output: &OutputConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(args, output, &mut out)
}

pub fn run(args: ReposArgs, output: &OutputConfig, out: &mut dyn Write) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    writeln!(out, "{}", BANNER_RULE)?;
    writeln!(out, "      {} - Core Engine", APP_NAME)?;
    writeln!(out, "{}", BANNER_RULE)?;
    writeln!(out, "Initializing core engine...")?;

    let catalog = RepoCatalog::demo(&mut rng);
    writeln!(out)?;
    writeln!(
        out,
        "[INFO] Found {} repositories in local database.",
        catalog.len()
    )?;
    writeln!(out)?;

    let simulator = CloneSimulator::new(DEFAULT_CLONE_STEPS, millis(args.step_delay_ms))
        .with_progress_bar(output.show_progress());

    for repo in catalog.iter() {
        write!(out, "{}", repo.details())?;
        writeln!(out, "{}", DETAIL_RULE)?;

        if args.clone.should_clone(&mut rng) {
            simulator.simulate(repo, out)?;
        }
    }

    if args.by_size {
        writeln!(out)?;
        writeln!(out, "Repositories by size:")?;
        for repo in catalog.sorted_by_size() {
            let size = format_kib(repo.size_bytes);
            writeln!(out, "  {:<15} {:>12}", repo.name, size)?;
        }
    }

    if !args.no_config {
        match Settings::default().write_ini(&args.output) {
            Ok(()) => {
                writeln!(out)?;
                writeln!(out, "[Config] Configuration saved successfully.")?;
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Exiting {} v{}. Have a nice day!",
        APP_NAME, APP_VERSION
    )?;
    Ok(())
}
