//! Incremental log file tailing
//!
//! A library for following a growing log file: it detects appends, truncation
//! and rotation (replacement of the file by a new one), and only reads the
//! bytes that were not consumed yet.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use tailview_core::LogTailer;
//!
//! let mut tailer = LogTailer::new();
//! tailer.open("/var/log/app.log")?;
//! println!("{}", tailer.text());
//!
//! // Once per UI frame
//! if let Some(Err(e)) = tailer.tick(Duration::from_secs(2)) {
//!     eprintln!("refresh failed: {e}");
//! }
//! # Ok::<(), tailview_core::TailError>(())
//! ```

mod buffer;
mod clock;
mod error;
mod probe;
mod reader;
mod scheduler;
mod tailer;

pub use buffer::LogBuffer;
pub use clock::{Clock, MonotonicClock};
pub use error::TailError;
pub use probe::{FileProbe, FileStat, FsProbe};
pub use reader::{IncrementalReader, ReadOutcome, TailCursor, READ_CHUNK_SIZE};
pub use scheduler::{
    DEFAULT_REFRESH_INTERVAL, MAX_REFRESH_INTERVAL, MIN_REFRESH_INTERVAL, RefreshPolicy,
    RefreshScheduler,
};
pub use tailer::{LogSource, LogTailer};
