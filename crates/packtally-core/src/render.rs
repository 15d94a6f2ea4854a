//! Plain-text report rendering.
//!
//! Rendering is a pure formatting step: the report is produced fully in
//! memory and persisting it is the caller's responsibility.

use std::fmt::Write as _;

use chrono::DateTime;
use chrono::Local;

use crate::inspect::ArchiveEntry;
use crate::stats::ArchiveTotals;
use crate::stats::ExtensionStats;

/// Formats a byte count as a human-readable size.
///
/// Uses binary thresholds (1024) with one decimal place for `KB` and up.
///
/// # Examples
///
/// ```
/// use packtally_core::render::format_size;
///
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(1536), "1.5 KB");
/// ```
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Renders the full compression report.
///
/// Layout: timestamp, source name, a fixed-column statistics table (one
/// row per extension key in first-encounter order), the total entry
/// count, a size-pair summary with factor and percent, and the flat list
/// of entry paths in archive order.
///
/// Deterministic: identical inputs render byte-identical text.
#[must_use]
pub fn render_report(
    stats: &[ExtensionStats],
    totals: &ArchiveTotals,
    entries: &[ArchiveEntry],
    source_name: &str,
    timestamp: DateTime<Local>,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", timestamp.format("%Y-%m-%d %H:%M:%S"));
    out.push('\n');
    let _ = writeln!(out, "Compressed: {source_name}");
    out.push('\n');

    let _ = writeln!(out, "{:<20} {:<15} {:<20}", "File", "#", "Zip factor (avg.)");
    for row in stats {
        let _ = writeln!(out, "{:<20} {:<15} {:<20}", row.key, row.count, row.mean_factor);
    }
    out.push('\n');

    let _ = writeln!(out, "Total number of files: {}", entries.len());
    out.push('\n');

    let _ = writeln!(
        out,
        "Compression: {} --> {} (factor: {}, percent: {})",
        format_size(totals.original_bytes),
        format_size(totals.stored_bytes),
        totals.factor,
        totals.percent
    );
    out.push('\n');

    let _ = writeln!(out, "Files:");
    for entry in entries {
        let _ = writeln!(out, "{}", entry.path);
    }

    out
}
