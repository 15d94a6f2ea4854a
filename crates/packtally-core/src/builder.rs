//! ZIP archive creation.

use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;

use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::ArchiveError;
use crate::Result;
use crate::config::ArchiveConfig;

/// Creates a deflate-compressed ZIP archive from a file or directory.
///
/// A single file becomes one entry named after the file. A directory is
/// walked recursively; regular files are stored under paths relative to
/// the directory's parent, so the directory name is the top-level prefix
/// inside the archive. Symlinks are not followed and directory entries
/// are not written.
///
/// # Errors
///
/// Returns an error if the source cannot be read, the output file cannot
/// be created, or writing the archive fails.
pub fn build_archive(source: &Path, archive_path: &Path, config: &ArchiveConfig) -> Result<()> {
    let file = File::create(archive_path)?;
    let mut zip = ZipWriter::new(file);

    let options = {
        let level = config.compression_level.unwrap_or(6);
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(level)))
    };

    // Reusable buffer for file copying.
    let mut buffer = vec![0u8; 64 * 1024];

    if source.is_file() {
        let name = source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ArchiveError::UnnamedSource {
                path: source.to_path_buf(),
            })?;
        add_file(&mut zip, source, name, options, &mut buffer)?;
    } else {
        let prefix = source.parent().unwrap_or(source);
        for entry in WalkDir::new(source) {
            let entry = entry.map_err(|e| {
                ArchiveError::Io(std::io::Error::other(format!("walkdir error: {e}")))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let rel = entry.path().strip_prefix(prefix).map_err(|e| {
                ArchiveError::Io(std::io::Error::other(format!(
                    "cannot relativize {}: {e}",
                    entry.path().display()
                )))
            })?;
            let name = zip_entry_name(rel)?;
            add_file(&mut zip, entry.path(), &name, options, &mut buffer)?;
        }
    }

    zip.finish()
        .map_err(|e| std::io::Error::other(format!("failed to finish ZIP archive: {e}")))?;

    Ok(())
}

/// Converts a relative filesystem path into a `/`-separated ZIP entry name.
fn zip_entry_name(rel: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in rel.components() {
        let part = component
            .as_os_str()
            .to_str()
            .ok_or_else(|| ArchiveError::UnnamedSource {
                path: rel.to_path_buf(),
            })?;
        parts.push(part);
    }
    Ok(parts.join("/"))
}

fn add_file<W: Write + std::io::Seek>(
    zip: &mut ZipWriter<W>,
    path: &Path,
    name: &str,
    options: SimpleFileOptions,
    buffer: &mut [u8],
) -> Result<()> {
    zip.start_file(name, options)
        .map_err(|e| std::io::Error::other(format!("failed to start entry {name}: {e}")))?;

    let mut file = File::open(path)?;
    loop {
        let n = file.read(buffer)?;
        if n == 0 {
            break;
        }
        zip.write_all(&buffer[..n])?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::inspect::inspect_archive;
    use tempfile::TempDir;

    #[test]
    fn test_build_from_single_file() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("notes.txt");
        std::fs::write(&source, "some text content").unwrap();
        let archive = temp.path().join("notes.zip");

        build_archive(&source, &archive, &ArchiveConfig::default()).unwrap();

        let entries = inspect_archive(&archive).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "notes.txt");
        assert_eq!(entries[0].original_size, 17);
    }

    #[test]
    fn test_build_from_directory_keeps_folder_prefix() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("project");
        std::fs::create_dir(&source).unwrap();
        std::fs::write(source.join("a.txt"), "aaaa").unwrap();
        let nested = source.join("sub");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("b.txt"), "bbbb").unwrap();

        let archive = temp.path().join("project.zip");
        build_archive(&source, &archive, &ArchiveConfig::default()).unwrap();

        let entries = inspect_archive(&archive).unwrap();
        let mut paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        paths.sort_unstable();
        assert_eq!(paths, vec!["project/a.txt", "project/sub/b.txt"]);
    }

    #[test]
    fn test_build_preserves_original_sizes() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("data");
        std::fs::create_dir(&source).unwrap();
        let contents: &[(&str, usize)] = &[("one.txt", 100), ("two.txt", 250), ("three.bin", 7)];
        for (name, size) in contents {
            std::fs::write(source.join(name), "x".repeat(*size)).unwrap();
        }

        let archive = temp.path().join("data.zip");
        build_archive(&source, &archive, &ArchiveConfig::default()).unwrap();

        let entries = inspect_archive(&archive).unwrap();
        assert_eq!(entries.len(), contents.len());
        for (name, size) in contents {
            let entry = entries
                .iter()
                .find(|e| e.path == format!("data/{name}"))
                .expect("entry missing");
            assert_eq!(entry.original_size, *size as u64);
        }
    }

    #[test]
    fn test_build_empty_directory_yields_empty_archive() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("empty");
        std::fs::create_dir(&source).unwrap();
        let archive = temp.path().join("empty.zip");

        build_archive(&source, &archive, &ArchiveConfig::default()).unwrap();

        let entries = inspect_archive(&archive).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_build_respects_compression_level() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("big.txt");
        std::fs::write(&source, "abcdef".repeat(10_000)).unwrap();

        let fast = temp.path().join("fast.zip");
        let best = temp.path().join("best.zip");
        build_archive(
            &source,
            &fast,
            &ArchiveConfig::default().with_compression_level(1),
        )
        .unwrap();
        build_archive(
            &source,
            &best,
            &ArchiveConfig::default().with_compression_level(9),
        )
        .unwrap();

        let fast_entries = inspect_archive(&fast).unwrap();
        let best_entries = inspect_archive(&best).unwrap();
        assert!(best_entries[0].stored_size <= fast_entries[0].stored_size);
    }
}
