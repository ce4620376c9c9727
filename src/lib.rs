//! # GitCode Viewer Library
//!
//! This library backs the `gitcode-viewer` demo binary: a mock repository
//! viewer and a small in-memory task manager. Nothing in it touches the
//! network; repository metadata is hardcoded or randomly generated, and
//! "cloning" and "syncing" are timed simulations.
//!
//! ## Quick Example
//!
//! ```
//! use gitcode_viewer::catalog::RepoCatalog;
//! use gitcode_viewer::tasks::{Priority, TaskManager};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let catalog = RepoCatalog::demo(&mut rng);
//! assert_eq!(catalog.len(), 5);
//!
//! let sorted = catalog.sorted_by_size();
//! assert!(sorted[0].size_bytes >= sorted[4].size_bytes);
//!
//! let mut tasks = TaskManager::new();
//! tasks.create("Implement auth", "Add JWT-based authentication", Priority::High);
//! assert_eq!(tasks.count(), 1);
//! ```
//!
//! ## Modules
//!
//! - **`catalog`**: Repository records, search, size sort and simulated sync.
//! - **`clone`**: The progress-dots clone simulation.
//! - **`files`**: Renderable file nodes and the one-thread background sort.
//! - **`tasks`**: The task manager with incrementing ids.
//! - **`settings`**: The static `config.ini` settings file.
//! - **`export`**: JSON export of a catalog.
//! - **`output`**, **`suggestions`**, **`defaults`**, **`error`**: CLI support.

pub mod catalog;
pub mod clone;
pub mod defaults;
pub mod error;
pub mod export;
pub mod files;
pub mod output;
pub mod settings;
pub mod suggestions;
pub mod tasks;

#[cfg(test)]
mod catalog_proptest;
