//! Incremental reader
//!
//! Reads only the bytes appended since the last call, and falls back to a full
//! re-read whenever the file was truncated, replaced or never read before.

use crate::error::TailError;
use crate::probe::{FileProbe, FileStat, FsProbe};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use std::time::SystemTime;

/// Size of the chunks the file is read in
pub const READ_CHUNK_SIZE: usize = 4096;

/// Read position: number of bytes of the source already consumed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TailCursor {
    pub offset: u64,
}

impl TailCursor {
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

/// Result of a successful read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The file is empty: the buffered content must be cleared
    Emptied,
    /// Nothing new since the last read
    Unchanged,
    /// Bytes appended after the previous cursor position
    Appended(Vec<u8>),
    /// The file was truncated, rotated or read for the first time.
    /// The buffered content must be replaced by these bytes.
    Reloaded(Vec<u8>),
}

impl ReadOutcome {
    /// Bytes carried by this outcome (empty for `Emptied`/`Unchanged`)
    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Appended(bytes) | Self::Reloaded(bytes) => bytes,
            Self::Emptied | Self::Unchanged => &[],
        }
    }

    /// `true` if the buffered content has to be discarded before applying
    pub fn is_reset(&self) -> bool {
        matches!(self, Self::Emptied | Self::Reloaded(_))
    }
}

/// Tracks the read position and last known modification time of one source
#[derive(Debug, Clone, Default)]
pub struct IncrementalReader<P = FsProbe> {
    probe: P,
    cursor: TailCursor,
    known_modified: Option<SystemTime>,
    last_stat: Option<FileStat>,
}

impl IncrementalReader<FsProbe> {
    pub fn new() -> Self {
        Self::with_probe(FsProbe)
    }
}

impl<P: FileProbe> IncrementalReader<P> {
    pub fn with_probe(probe: P) -> Self {
        Self {
            probe,
            cursor: TailCursor::default(),
            known_modified: None,
            last_stat: None,
        }
    }

    pub fn cursor(&self) -> TailCursor {
        self.cursor
    }

    /// Modification time seen by the last successful probe
    pub fn known_modified(&self) -> Option<SystemTime> {
        self.known_modified
    }

    /// Stat of the last successful probe
    pub fn last_stat(&self) -> Option<FileStat> {
        self.last_stat
    }

    /// Force the next read to start over from byte 0
    pub fn reset_cursor(&mut self) {
        self.cursor.reset();
    }

    /// Forget everything about the source (used when a new file is opened)
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.known_modified = None;
        self.last_stat = None;
    }

    /// Read whatever is new in `path`
    ///
    /// On error the cursor is left untouched. The known modification time is
    /// still updated whenever the probe itself succeeded.
    pub fn read(&mut self, path: &Path) -> Result<ReadOutcome, TailError> {
        if path.as_os_str().is_empty() {
            return Err(TailError::PathEmpty);
        }

        let stat = self
            .probe
            .probe(path)
            .ok_or_else(|| TailError::SourceMissing {
                path: path.to_path_buf(),
            })?;

        let modified = stat.modified != self.known_modified;
        self.known_modified = stat.modified;
        self.last_stat = Some(stat);

        if stat.size == 0 {
            self.cursor.reset();
            return Ok(ReadOutcome::Emptied);
        }

        let reset = stat.size < self.cursor.offset || modified || self.cursor.offset == 0;
        if !reset && self.cursor.offset == stat.size {
            return Ok(ReadOutcome::Unchanged);
        }

        let start = if reset { 0 } else { self.cursor.offset };
        let bytes = read_range(path, start, stat.size).map_err(|source| {
            TailError::SourceVanished {
                path: path.to_path_buf(),
                source,
            }
        })?;

        log::debug!(
            "read {} bytes from {} ({}..{}, reset={})",
            bytes.len(),
            path.display(),
            start,
            stat.size,
            reset
        );

        // The size seen by the probe, not a re-probed one: anything written
        // during the read is picked up by the next call.
        self.cursor.offset = stat.size;

        Ok(if reset {
            ReadOutcome::Reloaded(bytes)
        } else {
            ReadOutcome::Appended(bytes)
        })
    }
}

/// Read bytes `start..end` of a file in fixed-size chunks
///
/// Failing to open or seek is an error. A failure after that returns what was
/// read so far.
fn read_range(path: &Path, start: u64, end: u64) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(start))?;

    let len = end.saturating_sub(start);
    let mut reader = file.take(len);
    let mut bytes = Vec::with_capacity(usize::try_from(len).unwrap_or(0));
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => bytes.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                log::warn!(
                    "read error on {} after {} bytes, keeping partial data: {}",
                    path.display(),
                    bytes.len(),
                    e
                );
                break;
            }
        }
    }

    Ok(bytes)
}
