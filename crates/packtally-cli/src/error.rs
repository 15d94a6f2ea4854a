//! Error conversion utilities for CLI.
//!
//! Converts packtally-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use packtally_core::ArchiveError;
use std::path::Path;

/// Converts `ArchiveError` to user-friendly anyhow error with context
pub fn convert_archive_error(err: ArchiveError, source: &Path) -> anyhow::Error {
    match err {
        ArchiveError::InvalidSourcePath { path } => {
            anyhow!(
                "Not a file or folder: '{}'\n\
                 HINT: Check the path for typos; only existing files and directories can be archived.",
                path.display()
            )
        }
        ArchiveError::ArchiveAlreadyExists { path } => {
            anyhow!(
                "Archive already exists: '{}'\n\
                 HINT: Remove the existing archive or pick a different --archive-root.",
                path.display()
            )
        }
        ArchiveError::ArchiveUnreadable(reason) => {
            anyhow!(
                "Unreadable archive while processing '{}': {reason}\n\
                 HINT: The archive may be corrupted or not a ZIP file.",
                source.display()
            )
        }
        ArchiveError::ZeroStoredSize { path } => {
            anyhow!(
                "Entry '{path}' has zero stored bytes; its compression factor is undefined\n\
                 HINT: Drop --fail-on-zero-stored to count such entries without a factor."
            )
        }
        ArchiveError::DegenerateTotals { original, stored } => {
            anyhow!(
                "Cannot compute compression totals for '{}' (original={original} bytes, stored={stored} bytes)\n\
                 HINT: Empty archives and zero-byte sources have no meaningful compression ratio.",
                source.display()
            )
        }
        ArchiveError::Io(io_err) => {
            anyhow!("I/O error while processing '{}': {io_err}", source.display())
        }
        err @ ArchiveError::UnnamedSource { .. } => anyhow::Error::from(err)
            .context(format!("Error processing '{}'", source.display())),
    }
}

/// Adds context to a core result about archive operations
pub fn add_archive_context<T>(
    result: Result<T, ArchiveError>,
    source: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, source))
}
