//! Errors reported by a refresh attempt

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while tailing a log file
///
/// None of these are fatal: the buffer keeps its previous content and the
/// next scheduled refresh simply tries again.
#[derive(Error, Debug)]
pub enum TailError {
    /// No log file is bound (idle state)
    #[error("no log file opened")]
    PathEmpty,

    /// The file could not be stat'd (missing, permission denied, not a file)
    #[error("file not found: {}", path.display())]
    SourceMissing { path: PathBuf },

    /// The file existed when probed but could not be opened for reading
    #[error("file disappeared while reading {}: {source}", path.display())]
    SourceVanished {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TailError {
    /// `true` for the "nothing bound" state, which is not surfaced to the user
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::PathEmpty)
    }

    /// `true` when the source file is currently unavailable
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::SourceMissing { .. } | Self::SourceVanished { .. })
    }
}
