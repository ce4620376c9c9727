//! # Sync Command Implementation
//!
//! Walks three mock repositories through a simulated sync. Ids 1 and 2 sync,
//! id 3 has a broken URL and fails, id 4 is not in the catalog and gets no
//! "Starting sync" line. The catalog is listed before and after, then
//! searched by name.

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

use gitcode_viewer::catalog::{RepoCatalog, SyncOutcome};
use gitcode_viewer::defaults::{
    millis, DEFAULT_REPO_SYNC_DELAY_MS, DEFAULT_SEARCH_QUERY, SYNC_DEMO_IDS,
};
use gitcode_viewer::output::{emoji, failure, success, OutputConfig};

/// Sync a few mock repositories, then search them by name
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Case-insensitive name fragment to search for
    #[arg(short, long, value_name = "TEXT", default_value = DEFAULT_SEARCH_QUERY)]
    pub query: String,

    /// Simulated time per repository sync, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_REPO_SYNC_DELAY_MS)]
    pub delay_ms: u64,
}

/// Execute the `sync` command.
pub fn execute(args: SyncArgs, output: &OutputConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(args, output, &mut out)
}

pub fn run(args: SyncArgs, output: &OutputConfig, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Initializing sync engine...")?;

    let mut catalog = RepoCatalog::sync_demo();
    list_all(&catalog, out)?;

    writeln!(out)?;
    writeln!(out, "--- Performing Sync Operations ---")?;
    for id in SYNC_DEMO_IDS {
        if let Some(repo) = catalog.get(id) {
            writeln!(out, "Starting sync for {}...", repo.name)?;
        }
        for outcome in catalog.sync_many(&[id], millis(args.delay_ms)) {
            report(output, outcome, out)?;
        }
    }

    list_all(&catalog, out)?;

    writeln!(out)?;
    writeln!(out, "--- Search Results ('{}') ---", args.query)?;
    let results = catalog.search(&args.query);
    if results.is_empty() {
        writeln!(out, "No repositories match.")?;
    }
    for repo in results {
        writeln!(out, "Found: {}", repo.name)?;
    }

    Ok(())
}

fn report(output: &OutputConfig, outcome: SyncOutcome, out: &mut dyn Write) -> io::Result<()> {
    match outcome {
        SyncOutcome::Synced { name, .. } => writeln!(
            out,
            "{} {}",
            emoji(output, "✅", "[OK]"),
            success(output, &format!("Sync success: {}", name))
        ),
        SyncOutcome::Failed { name, error, .. } => writeln!(
            out,
            "{} {}",
            emoji(output, "❌", "[FAIL]"),
            failure(output, &format!("Sync failed for {}: {}", name, error))
        ),
        SyncOutcome::Missing { id } => writeln!(
            out,
            "{} Repo ID {} not found in database.",
            emoji(output, "⚠️ ", "[WARN]"),
            id
        ),
    }
}

fn list_all(catalog: &RepoCatalog, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Repository List ---")?;
    for repo in catalog.iter() {
        writeln!(out, "{}", repo)?;
    }
    writeln!(out, "-----------------------")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(query: &str) -> String {
        let args = SyncArgs {
            query: query.to_string(),
            delay_ms: 0,
        };
        let mut buf = Vec::new();
        run(args, &OutputConfig::from_env_and_flag("never"), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_sync_transcript() {
        let output = transcript("act");
        assert!(output.contains("[1] tokio (Unsynced)"));
        assert!(output.contains("Starting sync for tokio...\n[OK] Sync success: tokio\n"));
        assert!(output.contains("Starting sync for broken-repo...\n[FAIL]"));
        assert_eq!(output.matches("Starting sync for").count(), 3);
        assert!(output.contains("[OK] Sync success: tokio"));
        assert!(output.contains("[OK] Sync success: actix"));
        assert!(output.contains("[FAIL] Sync failed for broken-repo: repository not found"));
        assert!(output.contains("[WARN] Repo ID 4 not found in database."));
        assert!(output.contains("[1] tokio (Synced)"));
        assert!(output.contains("[3] broken-repo (Error(\"Invalid URL\"))"));
        assert!(output.contains("--- Search Results ('act') ---\nFound: actix\n"));
    }

    #[test]
    fn test_search_without_matches() {
        let output = transcript("zzz");
        assert!(output.contains("No repositories match."));
        assert!(!output.contains("Found:"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let output = transcript("TOK");
        assert!(output.contains("Found: tokio"));
    }
}
