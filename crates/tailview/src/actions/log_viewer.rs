//! Log viewer panel actions

use crate::state::TailStatus;
use std::path::PathBuf;
use std::sync::Arc;

/// Actions for the log viewer panel
#[derive(Debug, Clone)]
pub enum LogViewerAction {
    // Tailing (handled by the tail middleware, then reduced)
    /// Bind a new log file and load it
    Open(PathBuf),
    /// Clear the display; the next refresh re-reads the whole file
    Clear,
    /// Refresh now
    Refresh,
    /// Switch between automatic and manual refresh
    ToggleAutoRefresh,
    /// Refresh interval +0.1s
    IncreaseInterval,
    /// Refresh interval -0.1s
    DecreaseInterval,

    // Display options
    ToggleLineNumbers,
    ToggleWrap,
    /// Wrap column +10
    WidenWrap,
    /// Wrap column -10 (down to 0 = fit to panel)
    NarrowWrap,

    // Scrolling (offsets count lines from the bottom)
    ScrollUp(usize),
    ScrollDown(usize),
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    /// Height of the content area, for page sizes and scroll bounds
    SetVisibleHeight(usize),

    // Published by the tail middleware
    /// Source status changed
    StatusUpdated(TailStatus),
    /// Buffered content changed
    ContentUpdated {
        text: Arc<str>,
        line_count: usize,
        /// Content was replaced rather than appended to
        reset: bool,
    },
}
