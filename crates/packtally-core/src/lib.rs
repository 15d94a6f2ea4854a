//! ZIP archiving with per-extension compression statistics.
//!
//! `packtally-core` archives a single file or folder into a deflate-based
//! ZIP container, then inspects the result and derives compression
//! statistics: per-extension file counts and mean compression factors plus
//! whole-archive totals, rendered into a plain-text report persisted next
//! to the archive.
//!
//! # Examples
//!
//! ```no_run
//! use packtally_core::ArchiveConfig;
//! use packtally_core::archive_source;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ArchiveConfig::default().with_archive_root("/var/archives");
//! let summary = archive_source("photos", &config)?;
//! println!("Archived {} entries", summary.entry_count);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod builder;
pub mod config;
pub mod error;
pub mod inspect;
pub mod render;
pub mod stats;

// Re-export main API types
pub use api::ArchiveStats;
pub use api::RunSummary;
pub use api::archive_source;
pub use api::stats_for_archive;
pub use config::ArchiveConfig;
pub use config::ZeroStoredPolicy;
pub use error::ArchiveError;
pub use error::Result;
pub use inspect::ArchiveEntry;
pub use inspect::inspect_archive;
pub use stats::ArchiveTotals;
pub use stats::ExtensionStats;
pub use stats::OTHER_KEY;
pub use stats::aggregate;
pub use stats::extension_key;
