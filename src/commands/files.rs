//! # Files Command Implementation
//!
//! Lists the demo repository content, hands it to the background sync worker,
//! prints a fixed number of status lines on the main thread while the worker
//! sleeps, then joins the worker and lists the content again, largest first.

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

use gitcode_viewer::defaults::{millis, DEFAULT_FILE_SYNC_DELAY_MS, DEFAULT_WORK_STEPS};
use gitcode_viewer::files::{sync_in_background, FileListing};
use gitcode_viewer::output::OutputConfig;

/// List repository files and sort them by size on a background thread
#[derive(Args, Debug)]
pub struct FilesArgs {
    /// How long the sync worker sleeps before sorting, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_FILE_SYNC_DELAY_MS)]
    pub delay_ms: u64,

    /// Number of status lines the main thread prints while waiting
    #[arg(long, value_name = "N", default_value_t = DEFAULT_WORK_STEPS)]
    pub work_steps: u32,
}

/// Execute the `files` command.
pub fn execute(args: FilesArgs, output: &OutputConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(args, output, &mut out)
}

pub fn run(args: FilesArgs, output: &OutputConfig, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Starting file engine...")?;

    let listing = FileListing::demo();
    listing.render_to(out)?;

    writeln!(out)?;
    writeln!(out, "Syncing with remote...")?;
    let handle = sync_in_background(listing, millis(args.delay_ms))
        .context("Failed to start sync worker")?;

    writeln!(out, "Main thread doing other work...")?;
    for i in 0..args.work_steps {
        writeln!(out, "Working {}...", i)?;
    }
    out.flush()?;

    let spinner = output.show_progress().then(|| {
        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message("Waiting for sync worker");
        bar
    });

    let joined = handle.join();
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let sorted = joined?;

    writeln!(out, "Sync complete. Files sorted by size.")?;
    sorted.render_to(out)?;

    writeln!(out)?;
    writeln!(out, "Engine shutdown.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(work_steps: u32) -> String {
        let args = FilesArgs {
            delay_ms: 5,
            work_steps,
        };
        let mut buf = Vec::new();
        run(args, &OutputConfig::from_env_and_flag("never"), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_files_transcript_sorted_after_sync() {
        let output = transcript(3);
        let (before, after) = output
            .split_once("Sync complete. Files sorted by size.")
            .unwrap();

        let first_before = before.find("main.cpp").unwrap();
        assert!(first_before < before.find("logo.png").unwrap());

        let logo = after.find("logo.png").unwrap();
        let main = after.find("main.cpp").unwrap();
        let utils = after.find("utils.ts").unwrap();
        let styles = after.find("styles.css").unwrap();
        assert!(logo < main && main < utils && utils < styles);
        assert!(output.ends_with("Engine shutdown.\n"));
    }

    #[test]
    fn test_work_steps_printed() {
        let output = transcript(3);
        assert!(output.contains("Working 0...\nWorking 1...\nWorking 2...\n"));
        assert!(!output.contains("Working 3..."));
    }

    #[test]
    fn test_zero_work_steps() {
        let output = transcript(0);
        assert!(!output.contains("Working"));
        assert!(output.contains("Sync complete."));
    }
}
