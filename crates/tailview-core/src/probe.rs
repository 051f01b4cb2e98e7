//! File probing (existence, size, modification time)

use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Size and modification time of a probed file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    /// File size in bytes
    pub size: u64,
    /// Last modification time (`None` if the platform does not report it)
    pub modified: Option<SystemTime>,
}

/// Stats a path for the reader
///
/// Returning `None` means "the file does not exist right now". That is a
/// normal state for a log that has not been created yet, not an error.
pub trait FileProbe {
    fn probe(&self, path: &Path) -> Option<FileStat>;
}

/// Probe backed by the real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn probe(&self, path: &Path) -> Option<FileStat> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => {
                log::trace!("probe {}: {}", path.display(), e);
                return None;
            }
        };

        // Directories and other special files cannot be tailed
        if !metadata.is_file() {
            return None;
        }

        Some(FileStat {
            size: metadata.len(),
            modified: metadata.modified().ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_probe_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"hello\n").unwrap();
        drop(file);

        let stat = FsProbe.probe(&path).expect("file should exist");
        assert_eq!(stat.size, 6);
        assert!(stat.modified.is_some());
    }

    #[test]
    fn test_probe_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(FsProbe.probe(&dir.path().join("nope.log")), None);
    }

    #[test]
    fn test_probe_directory_is_not_a_source() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(FsProbe.probe(dir.path()), None);
    }

    #[test]
    fn test_probe_empty_path() {
        assert_eq!(FsProbe.probe(Path::new("")), None);
    }
}
