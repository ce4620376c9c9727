//! Renderable repository content and the background sync worker.
//!
//! A [`FileListing`] owns boxed [`FileNode`]s. [`sync_in_background`] hands the
//! listing to a single worker thread which sleeps for the sync delay and then
//! sorts it by size; the caller gets it back from [`SyncHandle::join`]. The
//! listing is moved into the worker, so the caller cannot touch it while the
//! sort runs.

use log::{debug, info};
use std::io::{self, Write};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::error::{Error, Result};

/// A file that can describe itself on a terminal.
pub trait FileNode: Send {
    fn name(&self) -> &str;

    /// Size in bytes
    fn size(&self) -> usize;

    fn render(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Source code file with a language tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    size: usize,
    language: String,
}

impl SourceFile {
    pub fn new(name: &str, size: usize, language: &str) -> Self {
        Self {
            name: name.to_string(),
            size,
            language: language.to_string(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    fn highlight_syntax(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "       >> Applying colors for {} syntax...",
            self.language
        )
    }
}

impl FileNode for SourceFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> usize {
        self.size
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "[CODE] {} ({}) - {} bytes",
            self.name, self.language, self.size
        )?;
        self.highlight_syntax(out)
    }
}

/// Image file with pixel dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    name: String,
    size: usize,
    width: u32,
    height: u32,
}

impl ImageFile {
    pub fn new(name: &str, size: usize, width: u32, height: u32) -> Self {
        Self {
            name: name.to_string(),
            size,
            width,
            height,
        }
    }
}

impl FileNode for ImageFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> usize {
        self.size
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "[IMG]  {} [{}x{}]", self.name, self.width, self.height)
    }
}

/// Ordered list of renderable files
#[derive(Default)]
pub struct FileListing {
    files: Vec<Box<dyn FileNode>>,
}

impl FileListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four files shown by the `files` walkthrough.
    pub fn demo() -> Self {
        let mut listing = Self::new();
        listing.add(Box::new(SourceFile::new("main.cpp", 1024, "C++")));
        listing.add(Box::new(SourceFile::new("utils.ts", 512, "TypeScript")));
        listing.add(Box::new(ImageFile::new("logo.png", 20480, 512, 512)));
        listing.add(Box::new(SourceFile::new("styles.css", 200, "CSS")));
        listing
    }

    pub fn add(&mut self, file: Box<dyn FileNode>) {
        debug!("Listing add: {} ({} bytes)", file.name(), file.size());
        self.files.push(file);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.name()).collect()
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.files.iter().map(|f| f.size()).collect()
    }

    /// Sort by size, largest first. Equal sizes keep insertion order.
    pub fn sort_by_size(&mut self) {
        self.files.sort_by(|a, b| b.size().cmp(&a.size()));
    }

    pub fn render_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "--- Repository Content ---")?;
        for file in &self.files {
            file.render(out)?;
        }
        writeln!(out, "--------------------------")
    }
}

/// Handle to a running background sync.
pub struct SyncHandle {
    handle: JoinHandle<FileListing>,
}

impl SyncHandle {
    /// Wait for the worker and take the sorted listing back.
    pub fn join(self) -> Result<FileListing> {
        self.handle.join().map_err(|_| Error::WorkerPanicked {
            context: "file listing sync".to_string(),
        })
    }
}

/// Spawn the sync worker: sleep for `delay`, then sort `listing` by size.
pub fn sync_in_background(mut listing: FileListing, delay: Duration) -> Result<SyncHandle> {
    let handle = thread::Builder::new()
        .name("file-sync".to_string())
        .spawn(move || {
            info!("Syncing with remote...");
            thread::sleep(delay);
            listing.sort_by_size();
            info!("Sync complete. Files sorted by size.");
            listing
        })?;
    Ok(SyncHandle { handle })
}
