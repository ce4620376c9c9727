//! # Repository Catalog
//!
//! An in-memory catalog of mock repository records. Nothing here talks to a
//! remote: URLs are descriptive only and "syncing" is a timed state change.
//!
//! The catalog is an ordered map keyed by [`RepoId`], so iteration is always
//! in ascending id order and output is stable between runs.

use log::{debug, warn};
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::thread;
use std::time::Duration;

use crate::error::{Error, Result, SyncError};

/// Identifier of a repository record.
pub type RepoId = u32;

/// Smallest size a mock repository can be given.
pub const MIN_MOCK_SIZE: u64 = 1024;

/// Size range added on top of [`MIN_MOCK_SIZE`] for mock repositories.
pub const MOCK_SIZE_SPREAD: u64 = 1_000_000;

/// Size recorded after a successful sync.
pub const SYNCED_SIZE: u64 = 1024 * 1024;

/// Sync state of a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoStatus {
    Unsynced,
    Syncing,
    Synced,
    Error(String),
}

/// A single repository record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub id: RepoId,
    pub name: String,
    pub language: String,
    pub url: String,
    pub size_bytes: u64,
    pub is_public: bool,
    pub status: RepoStatus,
}

impl Repository {
    /// Create an unsynced, public repository record.
    pub fn new(id: RepoId, name: &str, language: &str, url: &str, size_bytes: u64) -> Self {
        Self {
            id,
            name: name.to_string(),
            language: language.to_string(),
            url: url.to_string(),
            size_bytes,
            is_public: true,
            status: RepoStatus::Unsynced,
        }
    }

    /// Create a mock record whose size is drawn from `rng`.
    ///
    /// The size falls in `[MIN_MOCK_SIZE, MIN_MOCK_SIZE + MOCK_SIZE_SPREAD)`.
    pub fn mock<R: Rng + ?Sized>(id: RepoId, name: &str, language: &str, rng: &mut R) -> Self {
        let size_bytes = rng.gen_range(0..MOCK_SIZE_SPREAD) + MIN_MOCK_SIZE;
        let url = format!("https://github.com/mock/{}", name.to_lowercase());
        debug!("Created mock repository {} ({} bytes)", name, size_bytes);
        Self::new(id, name, language, &url, size_bytes)
    }

    /// Simulate syncing with the remote.
    ///
    /// URLs containing `invalid` fail with [`SyncError::NotFound`].
    pub fn sync(&mut self, delay: Duration) -> std::result::Result<(), SyncError> {
        debug!("Starting sync for {}", self.name);
        self.status = RepoStatus::Syncing;

        thread::sleep(delay);

        if self.url.contains("invalid") {
            warn!("Sync failed for {}: invalid URL {}", self.name, self.url);
            self.status = RepoStatus::Error("Invalid URL".to_string());
            return Err(SyncError::NotFound);
        }

        self.status = RepoStatus::Synced;
        self.size_bytes = SYNCED_SIZE;
        Ok(())
    }

    /// Print-ready detail block, one field per line.
    pub fn details(&self) -> String {
        format!(
            "Repo ID: {}\n  Name:     {}\n  Language: {}\n  Size:     {}\n",
            self.id,
            self.name,
            self.language,
            format_kib(self.size_bytes)
        )
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({:?})", self.id, self.name, self.status)
    }
}

/// Types that can be matched against a free-text query.
pub trait Searchable {
    fn contains_query(&self, query: &str) -> bool;
}

impl Searchable for Repository {
    fn contains_query(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Per-id result of [`RepoCatalog::sync_many`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Synced { id: RepoId, name: String },
    Failed {
        id: RepoId,
        name: String,
        error: SyncError,
    },
    Missing { id: RepoId },
}

/// Ordered in-memory collection of repositories
#[derive(Debug, Clone, Default)]
pub struct RepoCatalog {
    repos: BTreeMap<RepoId, Repository>,
}

impl RepoCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five hardcoded repositories shown by the viewer.
    pub fn demo<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut catalog = Self::new();
        let seeds = [
            ("react", "JavaScript"),
            ("linux", "C"),
            ("rust", "Rust"),
            ("tensorflow", "C++"),
            ("GitCodeViewer", "TypeScript"),
        ];
        for (id, (name, language)) in (1..).zip(seeds) {
            let repo = Repository::mock(id, name, language, rng);
            catalog.repos.insert(id, repo);
        }
        catalog
    }

    /// The three repositories used by the sync walkthrough, one with a broken URL.
    pub fn sync_demo() -> Self {
        let mut catalog = Self::new();
        for repo in [
            Repository::new(1, "tokio", "Rust", "https://github.com/tokio-rs/tokio", 0),
            Repository::new(2, "actix", "Rust", "https://github.com/actix/actix", 0),
            Repository::new(3, "broken-repo", "Rust", "https://invalid.url/test", 0),
        ] {
            catalog.repos.insert(repo.id, repo);
        }
        catalog
    }

    /// Add a repository. Ids must be unique within the catalog.
    pub fn add(&mut self, repo: Repository) -> Result<()> {
        if self.repos.contains_key(&repo.id) {
            return Err(Error::DuplicateRepo { id: repo.id });
        }
        debug!("Catalog add: {}", repo);
        self.repos.insert(repo.id, repo);
        Ok(())
    }

    pub fn get(&self, id: RepoId) -> Option<&Repository> {
        self.repos.get(&id)
    }

    pub fn get_mut(&mut self, id: RepoId) -> Option<&mut Repository> {
        self.repos.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    /// Iterate in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Repository> {
        self.repos.values()
    }

    /// Repositories whose name contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Repository> {
        self.repos
            .values()
            .filter(|r| r.contains_query(query))
            .collect()
    }

    /// Repositories ordered by non-increasing size. Ties keep id order.
    pub fn sorted_by_size(&self) -> Vec<&Repository> {
        let mut repos: Vec<&Repository> = self.repos.values().collect();
        repos.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
        repos
    }

    /// Sum of all repository sizes.
    pub fn total_size(&self) -> u64 {
        self.repos.values().map(|r| r.size_bytes).sum()
    }

    /// Sync each id in turn, reporting ids that are not in the catalog.
    pub fn sync_many(&mut self, ids: &[RepoId], delay: Duration) -> Vec<SyncOutcome> {
        ids.iter()
            .map(|&id| match self.repos.get_mut(&id) {
                Some(repo) => match repo.sync(delay) {
                    Ok(()) => SyncOutcome::Synced {
                        id,
                        name: repo.name.clone(),
                    },
                    Err(error) => SyncOutcome::Failed {
                        id,
                        name: repo.name.clone(),
                        error,
                    },
                },
                None => {
                    warn!("Repo ID {} not found in catalog", id);
                    SyncOutcome::Missing { id }
                }
            })
            .collect()
    }
}

/// Format a byte count as kibibytes with two decimals (e.g. `"1.50 KB"`).
pub fn format_kib(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Format a byte count in human-readable form
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{} KB", bytes / KB)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}
