//! Configuration for archiving runs.

use std::path::Path;
use std::path::PathBuf;

/// How the aggregator treats entries whose stored size is zero.
///
/// A zero stored size makes the per-entry compression factor undefined.
/// Neither choice is obviously right, so the policy is explicit instead of
/// a hard-coded crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroStoredPolicy {
    /// Abort the whole aggregation with `ZeroStoredSize`.
    Fail,
    /// Count the entry under its extension but exclude it from the factor
    /// mean. A key whose entries were all excluded reports a mean of 0.0.
    #[default]
    SkipFactor,
}

/// Configuration for a single archiving run.
///
/// The archive root is an explicit value, never a module-level constant;
/// callers decide where archives and their log files land.
///
/// # Examples
///
/// ```
/// use packtally_core::ArchiveConfig;
/// use packtally_core::ZeroStoredPolicy;
///
/// let config = ArchiveConfig::default()
///     .with_archive_root("/var/archives")
///     .with_compression_level(9)
///     .with_zero_stored(ZeroStoredPolicy::Fail);
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// Directory where the archive and its `<name>_log.txt` report are
    /// written.
    ///
    /// Default: `"."`.
    pub archive_root: PathBuf,

    /// Deflate compression level (1-9).
    ///
    /// `None` uses the default level.
    ///
    /// Default: `Some(6)` (balanced).
    pub compression_level: Option<u8>,

    /// Policy for entries with zero stored bytes.
    ///
    /// Default: [`ZeroStoredPolicy::SkipFactor`].
    pub zero_stored: ZeroStoredPolicy,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            archive_root: PathBuf::from("."),
            compression_level: Some(6),
            zero_stored: ZeroStoredPolicy::default(),
        }
    }
}

impl ArchiveConfig {
    /// Creates an `ArchiveConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the archive root directory.
    #[must_use]
    pub fn with_archive_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.archive_root = root.as_ref().to_path_buf();
        self
    }

    /// Sets the deflate compression level (1-9).
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = Some(level);
        self
    }

    /// Sets the zero-stored-size policy.
    #[must_use]
    pub fn with_zero_stored(mut self, policy: ZeroStoredPolicy) -> Self {
        self.zero_stored = policy;
        self
    }
}
