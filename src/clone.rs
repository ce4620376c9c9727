//! Simulated repository cloning.
//!
//! Nothing is fetched. A clone is a fixed number of timed steps rendered as
//! progress dots, or as an `indicatif` bar on stderr when progress display is
//! enabled. The final `Done!` line always goes to the supplied writer so the
//! stdout transcript is the same either way.

use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::Rng;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::catalog::{format_kib, Repository};

/// Default number of progress steps in a simulated clone.
pub const DEFAULT_CLONE_STEPS: u64 = 5;

/// Which repositories the viewer clones
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ClonePolicy {
    /// Clone every repository
    Always,
    /// Never clone
    Never,
    /// Flip a fair coin per repository
    #[default]
    Random,
}

impl ClonePolicy {
    pub fn should_clone<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        match self {
            ClonePolicy::Always => true,
            ClonePolicy::Never => false,
            ClonePolicy::Random => rng.gen_bool(0.5),
        }
    }
}

/// Summary of a finished simulated clone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneReport {
    pub name: String,
    pub steps: u64,
    pub size_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct CloneSimulator {
    steps: u64,
    step_delay: Duration,
    progress_bar: bool,
}

impl Default for CloneSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_CLONE_STEPS, Duration::ZERO)
    }
}

impl CloneSimulator {
    pub fn new(steps: u64, step_delay: Duration) -> Self {
        Self {
            steps,
            step_delay,
            progress_bar: false,
        }
    }

    /// Draw an `indicatif` bar on stderr while the clone runs.
    pub fn with_progress_bar(mut self, enabled: bool) -> Self {
        self.progress_bar = enabled;
        self
    }

    pub fn simulate(&self, repo: &Repository, out: &mut dyn Write) -> io::Result<CloneReport> {
        info!("Cloning {} from {}", repo.name, repo.url);

        if self.progress_bar {
            let bar = ProgressBar::new(self.steps);
            bar.set_style(
                ProgressStyle::with_template(">> Cloning {msg}... {bar:20.cyan/blue} {pos}/{len}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar.set_message(repo.name.clone());
            for _ in 0..self.steps {
                thread::sleep(self.step_delay);
                bar.inc(1);
            }
            bar.finish_and_clear();
            let dots = ".".repeat(self.steps as usize);
            write!(out, ">> Cloning {}... {}", repo.name, dots)?;
        } else {
            write!(out, ">> Cloning {}... ", repo.name)?;
            for _ in 0..self.steps {
                thread::sleep(self.step_delay);
                write!(out, ".")?;
                out.flush()?;
            }
        }
        writeln!(out, " Done! ({})", format_kib(repo.size_bytes))?;

        Ok(CloneReport {
            name: repo.name.clone(),
            steps: self.steps,
            size_bytes: repo.size_bytes,
        })
    }
}
