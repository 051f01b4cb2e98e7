//! Log tailer context
//!
//! Bundles everything that belongs to following one log file: the bound
//! source, the read cursor, the buffered content and the refresh timing.
//! All operations run synchronously on the caller's thread.

use crate::buffer::LogBuffer;
use crate::error::TailError;
use crate::probe::{FileProbe, FileStat, FsProbe};
use crate::reader::{IncrementalReader, ReadOutcome};
use crate::scheduler::{RefreshPolicy, RefreshScheduler};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The file being tailed (`None` = nothing bound)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSource {
    path: Option<PathBuf>,
}

impl LogSource {
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_bound(&self) -> bool {
        self.path.is_some()
    }

    fn bind(&mut self, path: &Path) {
        self.path = if path.as_os_str().is_empty() {
            None
        } else {
            Some(path.to_path_buf())
        };
    }
}

/// Follows one log file
#[derive(Debug, Default)]
pub struct LogTailer<P = FsProbe> {
    source: LogSource,
    reader: IncrementalReader<P>,
    buffer: LogBuffer,
    scheduler: RefreshScheduler,
    /// Whether the last read attempt found the source unavailable
    missing: bool,
}

impl LogTailer<FsProbe> {
    pub fn new() -> Self {
        Self::with_policy(RefreshPolicy::default())
    }

    pub fn with_policy(policy: RefreshPolicy) -> Self {
        Self::with_probe(FsProbe, policy)
    }
}

impl<P: FileProbe> LogTailer<P> {
    pub fn with_probe(probe: P, policy: RefreshPolicy) -> Self {
        Self {
            source: LogSource::default(),
            reader: IncrementalReader::with_probe(probe),
            buffer: LogBuffer::new(),
            scheduler: RefreshScheduler::new(policy),
            missing: false,
        }
    }

    pub fn source(&self) -> &LogSource {
        &self.source
    }

    pub fn path(&self) -> Option<&Path> {
        self.source.path()
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }

    pub fn content(&self) -> &[u8] {
        self.buffer.content()
    }

    pub fn text(&self) -> Cow<'_, str> {
        self.buffer.text()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    pub fn revision(&self) -> u64 {
        self.buffer.revision()
    }

    pub fn is_cleared(&self) -> bool {
        self.buffer.is_cleared()
    }

    /// Bytes of the source already consumed
    pub fn offset(&self) -> u64 {
        self.reader.cursor().offset
    }

    pub fn is_missing(&self) -> bool {
        self.missing
    }

    /// Stat of the source as of the last successful probe
    pub fn file_stat(&self) -> Option<FileStat> {
        self.reader.last_stat()
    }

    pub fn policy(&self) -> RefreshPolicy {
        self.scheduler.policy()
    }

    /// Bind a new source and load it right away
    ///
    /// Any previous content and read position are dropped, even when the
    /// same path is opened again.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<ReadOutcome, TailError> {
        let path = path.as_ref();
        log::info!("Opening log file {}", path.display());

        self.source.bind(path);
        self.buffer.discard();
        self.reader.reset();
        self.missing = false;

        self.read()
    }

    /// "Clear display": drop the content but keep the source bound
    ///
    /// The next refresh re-reads the whole file.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.reader.reset_cursor();
    }

    /// Refresh now, regardless of the schedule
    pub fn refresh(&mut self) -> Result<ReadOutcome, TailError> {
        if !self.source.is_bound() {
            return Err(TailError::PathEmpty);
        }

        if self.buffer.take_cleared() {
            log::debug!("Content was cleared, re-reading from the start");
            self.buffer.reset();
            self.reader.reset_cursor();
        }

        self.read()
    }

    /// Called once per UI tick
    ///
    /// Returns `None` when no refresh was due. The refresh timestamp is
    /// recorded on every attempt, also a failed one, so a missing file is
    /// retried once per interval and not on every tick.
    pub fn tick(&mut self, now: Duration) -> Option<Result<ReadOutcome, TailError>> {
        if !self.scheduler.is_due(now) {
            return None;
        }

        let result = self.refresh();
        self.scheduler.mark(now);
        Some(result)
    }

    /// Switch between automatic and manual refresh
    ///
    /// Enabling auto-refresh refreshes immediately instead of waiting for the
    /// next interval. Returns the result of that refresh, if one ran.
    pub fn set_auto_refresh(
        &mut self,
        enabled: bool,
        now: Duration,
    ) -> Option<Result<ReadOutcome, TailError>> {
        if !self.scheduler.set_auto_refresh(enabled) {
            return None;
        }

        self.buffer.take_cleared();

        if !enabled || !self.source.is_bound() {
            return None;
        }

        let result = self.read();
        self.scheduler.mark(now);
        Some(result)
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.scheduler.set_interval(interval);
    }

    pub fn adjust_interval(&mut self, delta_ms: i64) {
        self.scheduler.adjust_interval(delta_ms);
    }

    fn read(&mut self) -> Result<ReadOutcome, TailError> {
        let Some(path) = self.source.path() else {
            return Err(TailError::PathEmpty);
        };

        match self.reader.read(path) {
            Ok(outcome) => {
                if self.missing {
                    log::info!("Log file {} is available again", path.display());
                }
                self.missing = false;
                self.buffer.apply(outcome.clone());
                Ok(outcome)
            }
            Err(e) => {
                if !self.missing {
                    log::warn!("{}", e);
                }
                self.missing = e.is_missing();
                Err(e)
            }
        }
    }
}
