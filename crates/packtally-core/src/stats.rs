//! Per-extension compression statistics.
//!
//! This is the statistics engine: entries are classified by extension,
//! per-extension counts and mean compression factors are accumulated in a
//! single pass, and whole-archive totals are derived with explicit failure
//! on degenerate sizes.

use serde::Serialize;

use crate::ArchiveError;
use crate::Result;
use crate::config::ZeroStoredPolicy;
use crate::inspect::ArchiveEntry;

/// Sentinel extension key for paths that carry no usable extension.
pub const OTHER_KEY: &str = "other";

/// Aggregated statistics for one extension key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtensionStats {
    /// The extension key (e.g. `txt`, or [`OTHER_KEY`]).
    pub key: String,
    /// Number of entries classified under this key.
    pub count: usize,
    /// Arithmetic mean of the per-entry compression factors, rounded to
    /// 2 decimals. Each per-entry factor was itself rounded to 2 decimals
    /// before averaging.
    pub mean_factor: f64,
}

/// Whole-archive size totals and their derived ratios.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchiveTotals {
    /// Sum of original sizes over all entries.
    pub original_bytes: u64,
    /// Sum of stored sizes over all entries.
    pub stored_bytes: u64,
    /// `original_bytes / stored_bytes`, rounded to 2 decimals. May be
    /// below 1.0 when stored data exceeds the original.
    pub factor: f64,
    /// `stored_bytes * 100 / original_bytes`, rounded to 2 decimals.
    pub percent: f64,
}

impl ArchiveTotals {
    /// Derives totals from the two size sums.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::DegenerateTotals`] when either sum is zero,
    /// since the factor and percentage are undefined in that case.
    pub fn new(original_bytes: u64, stored_bytes: u64) -> Result<Self> {
        if original_bytes == 0 || stored_bytes == 0 {
            return Err(ArchiveError::DegenerateTotals {
                original: original_bytes,
                stored: stored_bytes,
            });
        }
        Ok(Self {
            original_bytes,
            stored_bytes,
            factor: round2(original_bytes as f64 / stored_bytes as f64),
            percent: round2(stored_bytes as f64 * 100.0 / original_bytes as f64),
        })
    }
}

/// Rounds to 2 decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Classifies an archive path into its extension key.
///
/// The key is the trailing contiguous ASCII-alphabetic run after the last
/// literal `.` in the final path segment, anchored at the end of the
/// string. Anything else classifies as [`OTHER_KEY`]: paths without a dot,
/// runs containing digits or punctuation (`archive.v2`), and hidden files
/// whose final segment starts with the dot (`.bashrc`).
///
/// Classification is a pure function of the path: the same input always
/// yields the same key, and the sentinel itself is a fixed point.
///
/// # Examples
///
/// ```
/// use packtally_core::extension_key;
///
/// assert_eq!(extension_key("photos/cat.jpg"), "jpg");
/// assert_eq!(extension_key("notes.tar.gz"), "gz");
/// assert_eq!(extension_key("readme"), "other");
/// assert_eq!(extension_key("archive.v2"), "other");
/// ```
#[must_use]
pub fn extension_key(path: &str) -> String {
    let segment = path.rsplit('/').next().unwrap_or(path);

    match segment.rfind('.') {
        // A leading dot marks a hidden file, not an extension.
        Some(dot) if dot > 0 => {
            let suffix = &segment[dot + 1..];
            if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_alphabetic()) {
                suffix.to_string()
            } else {
                OTHER_KEY.to_string()
            }
        }
        _ => OTHER_KEY.to_string(),
    }
}

/// Per-key accumulator used during the single aggregation pass.
struct Bucket {
    key: String,
    count: usize,
    factor_sum: f64,
    factor_count: usize,
}

/// Aggregates archive entries into per-extension statistics and totals.
///
/// Keys appear in the order their extension was first encountered, so the
/// output is reproducible for a given entry sequence. Each per-entry
/// factor is rounded to 2 decimals before it enters the mean; averaging
/// unrounded values would yield measurably different results for skewed
/// distributions.
///
/// # Errors
///
/// - [`ArchiveError::ZeroStoredSize`] when an entry has zero stored bytes
///   and the policy is [`ZeroStoredPolicy::Fail`].
/// - [`ArchiveError::DegenerateTotals`] when the summed original or stored
///   sizes are zero (including the empty-entries case).
///
/// # Examples
///
/// ```
/// use packtally_core::ArchiveEntry;
/// use packtally_core::ZeroStoredPolicy;
/// use packtally_core::aggregate;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let entries = vec![ArchiveEntry {
///     path: "a.txt".to_string(),
///     original_size: 100,
///     stored_size: 50,
/// }];
/// let (stats, totals) = aggregate(&entries, ZeroStoredPolicy::SkipFactor)?;
/// assert_eq!(stats[0].mean_factor, 2.0);
/// assert_eq!(totals.factor, 2.0);
/// # Ok(())
/// # }
/// ```
pub fn aggregate(
    entries: &[ArchiveEntry],
    policy: ZeroStoredPolicy,
) -> Result<(Vec<ExtensionStats>, ArchiveTotals)> {
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut total_original: u64 = 0;
    let mut total_stored: u64 = 0;

    for entry in entries {
        let key = extension_key(&entry.path);

        // Extension cardinality is small; a linear scan keeps first-encounter
        // order without a separate index map.
        let idx = match buckets.iter().position(|b| b.key == key) {
            Some(idx) => idx,
            None => {
                buckets.push(Bucket {
                    key,
                    count: 0,
                    factor_sum: 0.0,
                    factor_count: 0,
                });
                buckets.len() - 1
            }
        };
        let bucket = &mut buckets[idx];

        bucket.count += 1;

        if entry.stored_size == 0 {
            match policy {
                ZeroStoredPolicy::Fail => {
                    return Err(ArchiveError::ZeroStoredSize {
                        path: entry.path.clone(),
                    });
                }
                ZeroStoredPolicy::SkipFactor => {}
            }
        } else {
            let factor = round2(entry.original_size as f64 / entry.stored_size as f64);
            bucket.factor_sum += factor;
            bucket.factor_count += 1;
        }

        total_original += entry.original_size;
        total_stored += entry.stored_size;
    }

    let stats = buckets
        .into_iter()
        .map(|b| ExtensionStats {
            key: b.key,
            count: b.count,
            mean_factor: if b.factor_count > 0 {
                round2(b.factor_sum / b.factor_count as f64)
            } else {
                0.0
            },
        })
        .collect();

    let totals = ArchiveTotals::new(total_original, total_stored)?;

    Ok((stats, totals))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn entry(path: &str, original: u64, stored: u64) -> ArchiveEntry {
        ArchiveEntry {
            path: path.to_string(),
            original_size: original,
            stored_size: stored,
        }
    }

    #[test]
    fn test_extension_key_basic() {
        assert_eq!(extension_key("a.txt"), "txt");
        assert_eq!(extension_key("photos/cat.jpg"), "jpg");
        assert_eq!(extension_key("deep/nested/dir/doc.pdf"), "pdf");
    }

    #[test]
    fn test_extension_key_last_dot_wins() {
        assert_eq!(extension_key("notes.tar.gz"), "gz");
        assert_eq!(extension_key("a.b.c.d.html"), "html");
    }

    #[test]
    fn test_extension_key_no_dot() {
        assert_eq!(extension_key("readme"), "other");
        assert_eq!(extension_key("dir/Makefile"), "other");
    }

    #[test]
    fn test_extension_key_non_alphabetic_run() {
        assert_eq!(extension_key("archive.v2"), "other");
        assert_eq!(extension_key("backup.2024"), "other");
        assert_eq!(extension_key("odd.t-t"), "other");
        assert_eq!(extension_key("trailing.dot."), "other");
    }

    #[test]
    fn test_extension_key_hidden_files() {
        assert_eq!(extension_key(".bashrc"), "other");
        assert_eq!(extension_key("home/.profile"), "other");
        // A hidden file with a real extension still classifies.
        assert_eq!(extension_key(".config.toml"), "toml");
    }

    #[test]
    fn test_extension_key_only_final_segment_counts() {
        // The dot in the directory name must not contribute a key.
        assert_eq!(extension_key("v1.0/readme"), "other");
        assert_eq!(extension_key("v1.0/a.txt"), "txt");
    }

    #[test]
    fn test_extension_key_deterministic() {
        for path in ["a.txt", "readme", "archive.v2", ".bashrc"] {
            assert_eq!(extension_key(path), extension_key(path));
        }
        // The sentinel is a fixed point of classification.
        assert_eq!(extension_key(OTHER_KEY), OTHER_KEY);
    }

    #[test]
    fn test_aggregate_fixture_archive() {
        // a.txt 100->50, b.txt 200->100, c.jpg 100->99
        let entries = vec![
            entry("a.txt", 100, 50),
            entry("b.txt", 200, 100),
            entry("c.jpg", 100, 99),
        ];
        let (stats, totals) = aggregate(&entries, ZeroStoredPolicy::SkipFactor).unwrap();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].key, "txt");
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[0].mean_factor, 2.0);
        assert_eq!(stats[1].key, "jpg");
        assert_eq!(stats[1].count, 1);
        assert_eq!(stats[1].mean_factor, 1.01);

        assert_eq!(totals.original_bytes, 400);
        assert_eq!(totals.stored_bytes, 249);
    }

    #[test]
    fn test_aggregate_counts_partition_entries() {
        let entries = vec![
            entry("a.txt", 10, 5),
            entry("b.jpg", 10, 5),
            entry("readme", 10, 5),
            entry("c.txt", 10, 5),
            entry(".hidden", 10, 5),
        ];
        let (stats, _) = aggregate(&entries, ZeroStoredPolicy::SkipFactor).unwrap();
        let total: usize = stats.iter().map(|s| s.count).sum();
        assert_eq!(total, entries.len());
    }

    #[test]
    fn test_aggregate_insertion_order() {
        let entries = vec![
            entry("z.zip", 10, 5),
            entry("a.txt", 10, 5),
            entry("b.zip", 10, 5),
            entry("c.jpg", 10, 5),
        ];
        let (stats, _) = aggregate(&entries, ZeroStoredPolicy::SkipFactor).unwrap();
        let keys: Vec<&str> = stats.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["zip", "txt", "jpg"]);
    }

    #[test]
    fn test_aggregate_rounds_before_averaging() {
        // 1/3 rounds to 0.33 per entry; the mean of the rounded values is
        // 0.33, not round(1/3 + 1/3) / 2 of the unrounded ones.
        let entries = vec![entry("a.bin", 1, 3), entry("b.bin", 1, 3)];
        let (stats, _) = aggregate(&entries, ZeroStoredPolicy::SkipFactor).unwrap();
        assert_eq!(stats[0].mean_factor, 0.33);
    }

    #[test]
    fn test_aggregate_factor_below_one() {
        // Stored exceeding original is legitimate for incompressible data.
        let entries = vec![entry("tiny.bin", 10, 12)];
        let (stats, totals) = aggregate(&entries, ZeroStoredPolicy::SkipFactor).unwrap();
        assert_eq!(stats[0].mean_factor, 0.83);
        assert_eq!(totals.factor, 0.83);
        assert_eq!(totals.percent, 120.0);
    }

    #[test]
    fn test_aggregate_zero_stored_fail_policy() {
        let entries = vec![entry("a.txt", 10, 5), entry("b.txt", 10, 0)];
        let result = aggregate(&entries, ZeroStoredPolicy::Fail);
        assert!(matches!(
            result,
            Err(ArchiveError::ZeroStoredSize { path }) if path == "b.txt"
        ));
    }

    #[test]
    fn test_aggregate_zero_stored_skip_policy() {
        let entries = vec![entry("a.txt", 100, 50), entry("b.txt", 10, 0)];
        let (stats, totals) = aggregate(&entries, ZeroStoredPolicy::SkipFactor).unwrap();

        // Skipped entry still counts toward its key and the totals.
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[0].mean_factor, 2.0);
        assert_eq!(totals.original_bytes, 110);
        assert_eq!(totals.stored_bytes, 50);
    }

    #[test]
    fn test_aggregate_all_factors_skipped() {
        let entries = vec![entry("a.txt", 100, 50), entry("b.log", 10, 0)];
        let (stats, _) = aggregate(&entries, ZeroStoredPolicy::SkipFactor).unwrap();
        assert_eq!(stats[1].key, "log");
        assert_eq!(stats[1].count, 1);
        assert_eq!(stats[1].mean_factor, 0.0);
    }

    #[test]
    fn test_aggregate_empty_entries() {
        let result = aggregate(&[], ZeroStoredPolicy::SkipFactor);
        assert!(matches!(
            result,
            Err(ArchiveError::DegenerateTotals {
                original: 0,
                stored: 0
            })
        ));
    }

    #[test]
    fn test_aggregate_duplicate_paths_are_independent() {
        let entries = vec![entry("a.txt", 100, 50), entry("a.txt", 100, 50)];
        let (stats, totals) = aggregate(&entries, ZeroStoredPolicy::SkipFactor).unwrap();
        assert_eq!(stats[0].count, 2);
        assert_eq!(totals.original_bytes, 200);
    }

    #[test]
    fn test_totals_zero_original_fails() {
        let result = ArchiveTotals::new(0, 100);
        assert!(matches!(
            result,
            Err(ArchiveError::DegenerateTotals {
                original: 0,
                stored: 100
            })
        ));
    }

    #[test]
    fn test_totals_rounding() {
        let totals = ArchiveTotals::new(1000, 300).unwrap();
        assert_eq!(totals.factor, 3.33);
        assert_eq!(totals.percent, 30.0);
    }
}
