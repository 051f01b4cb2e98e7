//! Log viewer reducer
//!
//! Display options and scrolling. Tailing actions (open, clear, refresh, ...)
//! are performed by the tail middleware, which reports back through
//! `StatusUpdated` and `ContentUpdated`.

use crate::actions::LogViewerAction;
use crate::state::{LogViewerState, MAX_WRAP_WIDTH};

/// Step for the wrap column adjustments
const WRAP_WIDTH_STEP: u16 = 10;

pub fn reduce_log_viewer(mut state: LogViewerState, action: &LogViewerAction) -> LogViewerState {
    match action {
        LogViewerAction::ToggleLineNumbers => {
            state.show_line_numbers = !state.show_line_numbers;
        }
        LogViewerAction::ToggleWrap => {
            state.wrap_lines = !state.wrap_lines;
        }
        LogViewerAction::WidenWrap => {
            state.wrap_width = state
                .wrap_width
                .saturating_add(WRAP_WIDTH_STEP)
                .min(MAX_WRAP_WIDTH);
        }
        LogViewerAction::NarrowWrap => {
            state.wrap_width = state.wrap_width.saturating_sub(WRAP_WIDTH_STEP);
        }

        LogViewerAction::ScrollUp(lines) => {
            state.scroll_offset = state.scroll_offset.saturating_add(*lines);
        }
        LogViewerAction::ScrollDown(lines) => {
            state.scroll_offset = state.scroll_offset.saturating_sub(*lines);
        }
        LogViewerAction::PageUp => {
            state.scroll_offset = state.scroll_offset.saturating_add(state.page_size());
        }
        LogViewerAction::PageDown => {
            state.scroll_offset = state.scroll_offset.saturating_sub(state.page_size());
        }
        LogViewerAction::ScrollToTop => {
            state.scroll_offset = state.max_scroll();
        }
        LogViewerAction::ScrollToBottom => {
            state.scroll_offset = 0;
        }
        LogViewerAction::SetVisibleHeight(height) => {
            state.visible_height = *height;
        }

        LogViewerAction::StatusUpdated(status) => {
            state.status = status.clone();
        }
        LogViewerAction::ContentUpdated {
            text,
            line_count,
            reset,
        } => {
            if *reset {
                state.scroll_offset = 0;
            } else if state.scroll_offset > 0 {
                // Keep the same lines on screen while new ones arrive below
                let added = line_count.saturating_sub(state.line_count);
                state.scroll_offset = state.scroll_offset.saturating_add(added);
            }
            state.text = text.clone();
            state.line_count = *line_count;
        }

        LogViewerAction::Open(_)
        | LogViewerAction::Clear
        | LogViewerAction::Refresh
        | LogViewerAction::ToggleAutoRefresh
        | LogViewerAction::IncreaseInterval
        | LogViewerAction::DecreaseInterval => {}
    }

    state.scroll_offset = state.scroll_offset.min(state.max_scroll());
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TailStatus;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn content(lines: usize) -> LogViewerAction {
        let text: String = (1..=lines).map(|i| format!("line {}\n", i)).collect();
        LogViewerAction::ContentUpdated {
            text: Arc::from(text),
            line_count: lines,
            reset: false,
        }
    }

    fn viewer(lines: usize, height: usize) -> LogViewerState {
        let state = LogViewerState {
            wrap_lines: false,
            visible_height: height,
            ..LogViewerState::default()
        };
        reduce_log_viewer(state, &content(lines))
    }

    #[test]
    fn test_scroll_is_clamped() {
        let state = viewer(30, 10);

        let state = reduce_log_viewer(state, &LogViewerAction::ScrollUp(100));
        assert_eq!(state.scroll_offset, 20);

        let state = reduce_log_viewer(state, &LogViewerAction::ScrollDown(100));
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_paging_and_jumps() {
        let state = viewer(100, 10);

        let state = reduce_log_viewer(state, &LogViewerAction::PageUp);
        assert_eq!(state.scroll_offset, 9);

        let state = reduce_log_viewer(state, &LogViewerAction::ScrollToTop);
        assert_eq!(state.scroll_offset, 90);
        assert!(!state.is_following());

        let state = reduce_log_viewer(state, &LogViewerAction::PageDown);
        assert_eq!(state.scroll_offset, 81);

        let state = reduce_log_viewer(state, &LogViewerAction::ScrollToBottom);
        assert_eq!(state.scroll_offset, 0);
        assert!(state.is_following());
    }

    #[test]
    fn test_following_stays_at_bottom_on_append() {
        let state = viewer(30, 10);
        let state = reduce_log_viewer(state, &content(35));
        assert_eq!(state.scroll_offset, 0);
        assert_eq!(state.line_count, 35);
    }

    #[test]
    fn test_scrolled_view_keeps_its_lines_on_append() {
        let state = viewer(30, 10);
        let state = reduce_log_viewer(state, &LogViewerAction::ScrollUp(5));

        let state = reduce_log_viewer(state, &content(33));
        assert_eq!(state.scroll_offset, 8);
    }

    #[test]
    fn test_reset_content_jumps_to_bottom() {
        let state = viewer(30, 10);
        let state = reduce_log_viewer(state, &LogViewerAction::ScrollUp(5));

        let state = reduce_log_viewer(
            state,
            &LogViewerAction::ContentUpdated {
                text: Arc::from("rotated\n"),
                line_count: 1,
                reset: true,
            },
        );
        assert_eq!(state.scroll_offset, 0);
        assert_eq!(&*state.text, "rotated\n");
    }

    #[test]
    fn test_shrinking_viewport_keeps_offset_in_bounds() {
        let state = viewer(30, 10);
        let state = reduce_log_viewer(state, &LogViewerAction::ScrollToTop);
        assert_eq!(state.scroll_offset, 20);

        let state = reduce_log_viewer(state, &LogViewerAction::SetVisibleHeight(25));
        assert_eq!(state.scroll_offset, 5);
    }

    #[test]
    fn test_wrapping_allows_every_line_at_the_bottom() {
        let state = viewer(30, 10);
        let state = reduce_log_viewer(state, &LogViewerAction::ToggleWrap);
        let state = reduce_log_viewer(state, &LogViewerAction::ScrollToTop);
        assert_eq!(state.scroll_offset, 29);
    }

    #[test]
    fn test_wrap_width_steps() {
        let state = LogViewerState::default();
        let state = reduce_log_viewer(state, &LogViewerAction::WidenWrap);
        let state = reduce_log_viewer(state, &LogViewerAction::WidenWrap);
        assert_eq!(state.wrap_width, 20);

        let state = reduce_log_viewer(state, &LogViewerAction::NarrowWrap);
        let state = reduce_log_viewer(state, &LogViewerAction::NarrowWrap);
        let state = reduce_log_viewer(state, &LogViewerAction::NarrowWrap);
        assert_eq!(state.wrap_width, 0);
    }

    #[test]
    fn test_wrap_width_stops_at_maximum() {
        let state = LogViewerState {
            wrap_width: MAX_WRAP_WIDTH - 5,
            ..LogViewerState::default()
        };
        let state = reduce_log_viewer(state, &LogViewerAction::WidenWrap);
        assert_eq!(state.wrap_width, MAX_WRAP_WIDTH);
        let state = reduce_log_viewer(state, &LogViewerAction::WidenWrap);
        assert_eq!(state.wrap_width, MAX_WRAP_WIDTH);
    }

    #[test]
    fn test_display_toggles() {
        let state = LogViewerState::default();
        assert!(state.show_line_numbers);
        let state = reduce_log_viewer(state, &LogViewerAction::ToggleLineNumbers);
        assert!(!state.show_line_numbers);
    }

    #[test]
    fn test_status_is_replaced() {
        let status = TailStatus {
            path: Some(PathBuf::from("/tmp/app.log")),
            offset: 42,
            cleared: true,
            ..TailStatus::default()
        };
        let state = reduce_log_viewer(
            LogViewerState::default(),
            &LogViewerAction::StatusUpdated(status.clone()),
        );
        assert_eq!(state.status, status);
        assert!(!state.is_following());
    }
}
