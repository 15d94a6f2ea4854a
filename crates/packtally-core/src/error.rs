//! Error types for archiving and statistics operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while archiving a source or computing statistics.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source path is neither an existing file nor an existing directory.
    #[error("source path is neither a file nor a directory: {path}")]
    InvalidSourcePath {
        /// The offending source path.
        path: PathBuf,
    },

    /// A file already exists at the computed archive path.
    #[error("archive already exists: {path}")]
    ArchiveAlreadyExists {
        /// The occupied archive path.
        path: PathBuf,
    },

    /// Archive cannot be opened or parsed.
    #[error("unreadable archive: {0}")]
    ArchiveUnreadable(String),

    /// An entry reports zero stored bytes, so its compression factor is
    /// undefined.
    #[error("entry has zero stored bytes: {path}")]
    ZeroStoredSize {
        /// Archive-relative path of the degenerate entry.
        path: String,
    },

    /// Archive totals cannot produce a factor or percentage.
    #[error("cannot compute compression totals: original={original} bytes, stored={stored} bytes")]
    DegenerateTotals {
        /// Sum of original sizes.
        original: u64,
        /// Sum of stored sizes.
        stored: u64,
    },

    /// No archive name could be derived from the source path.
    #[error("cannot derive an archive name from: {path}")]
    UnnamedSource {
        /// The source path without a usable final component.
        path: PathBuf,
    },
}

impl ArchiveError {
    /// Returns `true` if this error is caused by the caller's input rather
    /// than a defect in the builder or inspector.
    ///
    /// # Examples
    ///
    /// ```
    /// use packtally_core::ArchiveError;
    /// use std::path::PathBuf;
    ///
    /// let err = ArchiveError::InvalidSourcePath {
    ///     path: PathBuf::from("/no/such/thing"),
    /// };
    /// assert!(err.is_usage_error());
    ///
    /// let err = ArchiveError::ArchiveUnreadable("bad header".to_string());
    /// assert!(!err.is_usage_error());
    /// ```
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSourcePath { .. }
                | Self::ArchiveAlreadyExists { .. }
                | Self::UnnamedSource { .. }
        )
    }

    /// Returns a context string for this error, if available.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::ArchiveUnreadable(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArchiveError::InvalidSourcePath {
            path: PathBuf::from("/no/such/thing"),
        };
        assert!(err.to_string().contains("neither a file nor a directory"));
        assert!(err.to_string().contains("/no/such/thing"));
    }

    #[test]
    fn test_already_exists_display() {
        let err = ArchiveError::ArchiveAlreadyExists {
            path: PathBuf::from("/archives/photos.zip"),
        };
        assert!(err.to_string().contains("already exists"));
        assert!(err.to_string().contains("photos.zip"));
    }

    #[test]
    fn test_degenerate_totals_display() {
        let err = ArchiveError::DegenerateTotals {
            original: 0,
            stored: 12,
        };
        let display = err.to_string();
        assert!(display.contains("original=0"));
        assert!(display.contains("stored=12"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ArchiveError = io_err.into();
        assert!(matches!(err, ArchiveError::Io(_)));
    }

    #[test]
    fn test_is_usage_error() {
        let err = ArchiveError::ArchiveAlreadyExists {
            path: PathBuf::from("a.zip"),
        };
        assert!(err.is_usage_error());

        let err = ArchiveError::ZeroStoredSize {
            path: "a.txt".to_string(),
        };
        assert!(!err.is_usage_error());

        let err = ArchiveError::ArchiveUnreadable("truncated".to_string());
        assert!(!err.is_usage_error());
    }

    #[test]
    fn test_context() {
        let err = ArchiveError::ArchiveUnreadable("bad central directory".to_string());
        assert_eq!(err.context(), Some("bad central directory"));

        let err = ArchiveError::ZeroStoredSize {
            path: "a.txt".to_string(),
        };
        assert_eq!(err.context(), None);
    }
}
