//! Archive inspection without extraction.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::ArchiveError;
use crate::Result;

/// One file stored inside an archive, with its original and stored sizes.
///
/// Entries are read-only: they are derived by inspecting an already-built
/// archive and never mutated. Archives containing duplicate paths are not
/// deduplicated; each occurrence is an independent entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveEntry {
    /// Archive-relative path, `/`-separated as stored in the container.
    pub path: String,
    /// Uncompressed size in bytes.
    pub original_size: u64,
    /// Stored (compressed) size in bytes. May exceed `original_size` for
    /// tiny or incompressible files.
    pub stored_size: u64,
}

/// Reads the entry listing of a ZIP archive.
///
/// Entries are returned in the archive's central-directory order, unsorted.
/// Directory entries are skipped; only stored files carry sizes worth
/// tallying. The archive handle is scoped to this call and released on all
/// exit paths.
///
/// # Errors
///
/// Returns [`ArchiveError::ArchiveUnreadable`] if the path does not exist,
/// is not a valid ZIP archive, or an entry cannot be read.
///
/// # Examples
///
/// ```no_run
/// use packtally_core::inspect_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let entries = inspect_archive("photos.zip")?;
/// for entry in &entries {
///     println!("{}: {} -> {} bytes", entry.path, entry.original_size, entry.stored_size);
/// }
/// # Ok(())
/// # }
/// ```
pub fn inspect_archive<P: AsRef<Path>>(archive_path: P) -> Result<Vec<ArchiveEntry>> {
    let archive_path = archive_path.as_ref();

    let file = File::open(archive_path).map_err(|e| {
        ArchiveError::ArchiveUnreadable(format!("cannot open {}: {e}", archive_path.display()))
    })?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| {
        ArchiveError::ArchiveUnreadable(format!("not a valid ZIP archive: {e}"))
    })?;

    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .map_err(|e| ArchiveError::ArchiveUnreadable(format!("cannot read entry {i}: {e}")))?;

        if entry.is_dir() {
            continue;
        }

        entries.push(ArchiveEntry {
            path: entry.name().to_string(),
            original_size: entry.size(),
            stored_size: entry.compressed_size(),
        });
    }

    Ok(entries)
}
