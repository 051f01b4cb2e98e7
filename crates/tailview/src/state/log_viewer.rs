//! Log Viewer State

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tailview_config::AppConfig;
use tailview_core::{FileStat, RefreshPolicy};

/// Widest wrap column
pub const MAX_WRAP_WIDTH: u16 = 1000;

/// What the tail middleware knows about the source, minus the content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TailStatus {
    /// Bound log file (`None` until a file is opened)
    pub path: Option<PathBuf>,
    /// Bytes consumed so far
    pub offset: u64,
    /// Live stat of the file (`None` if it does not exist)
    pub file: Option<FileStat>,
    /// Content was cleared; the next refresh re-reads the file
    pub cleared: bool,
    pub policy: RefreshPolicy,
}

impl TailStatus {
    /// A file is bound but cannot be found
    pub fn is_missing(&self) -> bool {
        self.path.is_some() && self.file.is_none()
    }

    pub fn interval(&self) -> Duration {
        self.policy.interval
    }
}

/// Log viewer panel state
#[derive(Debug, Clone)]
pub struct LogViewerState {
    pub status: TailStatus,
    /// Buffered content as published by the tail middleware
    pub text: Arc<str>,
    pub line_count: usize,
    pub show_line_numbers: bool,
    pub wrap_lines: bool,
    /// Wrap column, 0 = fit to panel
    pub wrap_width: u16,
    /// Scroll position in lines from the bottom (0 = newest line at the bottom)
    pub scroll_offset: usize,
    pub visible_height: usize,
}

impl Default for LogViewerState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl LogViewerState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            status: TailStatus {
                policy: RefreshPolicy::new(config.auto_refresh, config.refresh_interval()),
                ..TailStatus::default()
            },
            text: Arc::from(""),
            line_count: 0,
            show_line_numbers: config.show_line_numbers,
            wrap_lines: config.wrap_lines,
            wrap_width: config.wrap_width.min(MAX_WRAP_WIDTH),
            scroll_offset: 0,
            visible_height: 0,
        }
    }

    /// Largest meaningful scroll offset
    ///
    /// With wrapping a single line can fill several rows, so every line must
    /// be reachable as the bottom line.
    pub fn max_scroll(&self) -> usize {
        if self.wrap_lines || self.visible_height == 0 {
            self.line_count.saturating_sub(1)
        } else {
            self.line_count.saturating_sub(self.visible_height)
        }
    }

    /// New lines stay pinned to the bottom
    pub fn is_following(&self) -> bool {
        self.scroll_offset == 0 && !self.status.cleared
    }

    pub fn page_size(&self) -> usize {
        self.visible_height.saturating_sub(1).max(1)
    }
}
