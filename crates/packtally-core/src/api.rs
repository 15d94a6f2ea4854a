//! High-level orchestration: build, inspect, aggregate, report.

use std::path::Path;
use std::path::PathBuf;

use chrono::Local;
use serde::Serialize;

use crate::ArchiveError;
use crate::Result;
use crate::builder::build_archive;
use crate::config::ArchiveConfig;
use crate::config::ZeroStoredPolicy;
use crate::inspect::ArchiveEntry;
use crate::inspect::inspect_archive;
use crate::render::render_report;
use crate::stats::ArchiveTotals;
use crate::stats::ExtensionStats;
use crate::stats::aggregate;

/// Summary of one archiving run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Path of the created archive.
    pub archive_path: PathBuf,
    /// Path of the persisted report file.
    pub report_path: PathBuf,
    /// Number of entries stored in the archive.
    pub entry_count: usize,
    /// Whole-archive size totals.
    pub totals: ArchiveTotals,
}

/// Statistics computed for an existing archive, without building anything.
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveStats {
    /// Entries in archive order.
    pub entries: Vec<ArchiveEntry>,
    /// Per-extension statistics in first-encounter order.
    pub stats: Vec<ExtensionStats>,
    /// Whole-archive size totals.
    pub totals: ArchiveTotals,
}

/// Archives a file or directory and persists the compression report.
///
/// The archive lands at `archive_root/<name>.zip` and the report at
/// `archive_root/<name>_log.txt`, where `<name>` is the file stem for a
/// file source and the directory name for a directory source. The run is
/// strictly sequential: build, inspect, aggregate, render, persist.
///
/// The report is rendered fully in memory and written through a temporary
/// file renamed into place, so no partial report is ever left behind.
///
/// # Errors
///
/// - [`ArchiveError::InvalidSourcePath`] when the source is neither an
///   existing file nor an existing directory.
/// - [`ArchiveError::ArchiveAlreadyExists`] when the target archive path
///   is already occupied; nothing is written in that case.
/// - [`ArchiveError::ArchiveUnreadable`] when the just-built archive
///   cannot be reopened, which indicates a builder defect.
/// - Aggregation errors per [`aggregate`].
///
/// # Examples
///
/// ```no_run
/// use packtally_core::ArchiveConfig;
/// use packtally_core::archive_source;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ArchiveConfig::default().with_archive_root("/var/archives");
/// let summary = archive_source("photos", &config)?;
/// println!("report at {}", summary.report_path.display());
/// # Ok(())
/// # }
/// ```
pub fn archive_source<P: AsRef<Path>>(source: P, config: &ArchiveConfig) -> Result<RunSummary> {
    let source = source.as_ref();

    if !source.is_file() && !source.is_dir() {
        return Err(ArchiveError::InvalidSourcePath {
            path: source.to_path_buf(),
        });
    }

    let name = source_name(source)?;
    let archive_path = config.archive_root.join(format!("{name}.zip"));
    if archive_path.exists() {
        return Err(ArchiveError::ArchiveAlreadyExists { path: archive_path });
    }

    build_archive(source, &archive_path, config)?;

    let entries = inspect_archive(&archive_path)?;
    let (stats, totals) = aggregate(&entries, config.zero_stored)?;
    let text = render_report(&stats, &totals, &entries, &name, Local::now());

    let report_path = config.archive_root.join(format!("{name}_log.txt"));
    write_atomic(&report_path, &text)?;

    Ok(RunSummary {
        archive_path,
        report_path,
        entry_count: entries.len(),
        totals,
    })
}

/// Computes per-extension statistics for an existing archive.
///
/// Read-only counterpart of [`archive_source`]: nothing is built and no
/// report file is written.
///
/// # Errors
///
/// Returns [`ArchiveError::ArchiveUnreadable`] when the archive cannot be
/// opened, plus aggregation errors per [`aggregate`].
pub fn stats_for_archive<P: AsRef<Path>>(
    archive_path: P,
    policy: ZeroStoredPolicy,
) -> Result<ArchiveStats> {
    let entries = inspect_archive(archive_path)?;
    let (stats, totals) = aggregate(&entries, policy)?;
    Ok(ArchiveStats {
        entries,
        stats,
        totals,
    })
}

/// Derives the archive name from the source path.
///
/// Files contribute their stem (`notes.txt` archives as `notes.zip`),
/// directories their full final component.
fn source_name(source: &Path) -> Result<String> {
    let component = if source.is_file() {
        source.file_stem()
    } else {
        source.file_name()
    };

    component
        .and_then(|n| n.to_str())
        .map(ToString::to_string)
        .ok_or_else(|| ArchiveError::UnnamedSource {
            path: source.to_path_buf(),
        })
}

/// Writes `text` to `path` via a sibling temporary file and a rename.
fn write_atomic(path: &Path, text: &str) -> Result<()> {
    let tmp = path.with_extension("txt.tmp");
    std::fs::write(&tmp, text)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
