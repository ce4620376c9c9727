//! # Error Suggestions
//!
//! Helpers that turn library errors into messages telling users what went
//! wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gitcode_viewer::suggestions;
//!
//! settings.write_ini(&path).map_err(|e| suggestions::settings_not_written(&path, e))?;
//! ```

use std::path::Path;

use crate::error::Error;

/// Generate an error for a settings file that could not be written.
///
/// Includes hints about:
/// - Choosing a writable location with -o/--output
/// - Using the GITCODE_CONFIG environment variable
pub fn settings_not_written(path: &Path, error: Error) -> anyhow::Error {
    anyhow::anyhow!(
        "Failed to save configuration to {path}: {error}\n\n\
         hint: Check that the directory exists and is writable\n\
         hint: Use -o/--output to choose a different path\n\
         hint: Set GITCODE_CONFIG environment variable",
        path = path.display()
    )
}

/// Generate an error for an export that could not be written.
pub fn export_not_written(path: &Path, error: Error) -> anyhow::Error {
    anyhow::anyhow!(
        "Failed to export repositories to {path}: {error}\n\n\
         hint: Check that the directory exists and is writable\n\
         hint: Use -o/--output to choose a different path",
        path = path.display()
    )
}

/// Generate an error for a task id that does not exist.
pub fn task_not_found(id: u32, count: usize) -> anyhow::Error {
    anyhow::anyhow!(
        "Task not found: {id}\n\n\
         hint: Task ids start at 1; this run created {count} task(s)\n\
         hint: Add more tasks with --task <TITLE>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_settings_not_written_has_hints() {
        let path = PathBuf::from("/readonly/config.ini");
        let error = Error::ConfigWrite {
            path: path.clone(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = settings_not_written(&path, error).to_string();
        assert!(message.contains("Failed to save configuration"));
        assert!(message.contains("/readonly/config.ini"));
        assert!(message.contains("hint: Use -o/--output"));
        assert!(message.contains("GITCODE_CONFIG"));
    }

    #[test]
    fn test_export_not_written() {
        let path = PathBuf::from("/x/out.json");
        let error = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let message = export_not_written(&path, error).to_string();
        assert!(message.contains("Failed to export repositories"));
        assert!(message.contains("missing"));
    }

    #[test]
    fn test_task_not_found_mentions_count() {
        let message = task_not_found(9, 2).to_string();
        assert!(message.contains("Task not found: 9"));
        assert!(message.contains("created 2 task(s)"));
    }
}
