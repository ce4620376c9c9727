//! # Error Handling
//!
//! This module defines the centralized error type for the `gitcode-viewer`
//! library. It uses `thiserror` to derive descriptive messages for every
//! failure mode the demos can hit.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum covering catalog, task, settings, export and
//!   worker-thread failures, plus wrapped I/O and JSON errors.
//! - **`SyncError`**: The outcome of a simulated repository sync. It is kept
//!   separate from `Error` because a failed sync is reported per repository
//!   and never aborts a run.
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::RepoId;
use crate::tasks::TaskId;

/// Main error type for gitcode-viewer operations
#[derive(Error, Debug)]
pub enum Error {
    /// A repository with the same id is already in the catalog.
    #[error("Duplicate repository id: {id}")]
    DuplicateRepo { id: RepoId },

    /// No task exists with the requested id.
    #[error("Task not found: {id}")]
    TaskNotFound { id: TaskId },

    /// The settings file could not be written.
    #[error("Error opening file {}: {source}", path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file could not be read or parsed.
    #[error("Error reading settings from {}: {message}", path.display())]
    ConfigRead { path: PathBuf, message: String },

    /// A background worker thread panicked before it could be joined.
    #[error("Worker thread panicked: {context}")]
    WorkerPanicked { context: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure modes of a simulated repository sync.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("network error")]
    NetworkError,
    #[error("repository not found")]
    NotFound,
    #[error("permission denied")]
    PermissionDenied,
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
