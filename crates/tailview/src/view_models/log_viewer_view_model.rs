//! Log Viewer View Model
//!
//! Pre-computes everything the log viewer renders: the file info header,
//! the notice banner, toolbar toggles and the visible rows of log content.

use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::command_id::CommandId;
use crate::keybindings::Keymap;
use crate::state::{LogViewerState, TailStatus};

/// Columns a tab expands to
const TAB_WIDTH: usize = 4;
/// Narrowest line number gutter
const MIN_GUTTER_WIDTH: usize = 4;

/// Commands shown in the footer, in order
const FOOTER_COMMANDS: [CommandId; 8] = [
    CommandId::LogOpen,
    CommandId::LogClear,
    CommandId::LogRefresh,
    CommandId::LogToggleAutoRefresh,
    CommandId::ViewToggleLineNumbers,
    CommandId::ViewToggleWrap,
    CommandId::NavigateToBottom,
    CommandId::GlobalQuit,
];

/// View model for rendering the log viewer
#[derive(Debug, Clone, PartialEq)]
pub struct LogViewerViewModel {
    /// Panel title, e.g. " app.log "
    pub title: String,
    /// Follow indicator shown in the panel border
    pub follow_label: String,
    /// Header lines as (label, value) pairs
    pub info: Vec<InfoField>,
    pub notice: Option<Notice>,
    pub toolbar: Vec<ToolbarItem>,
    /// Rows of log content, top to bottom
    pub rows: Vec<DisplayRow>,
    /// Width of the line number column (0 = no gutter)
    pub gutter_width: usize,
    /// Shown instead of rows when there is nothing to display
    pub placeholder: Option<&'static str>,
    /// Footer hints as (keys, description)
    pub hints: Vec<(String, &'static str)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// No file opened yet
    Idle,
    /// Content was cleared and waits for the next refresh
    Cleared,
    /// The bound file cannot be found
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarItem {
    pub label: String,
    pub active: bool,
}

/// One screen row of log content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Line number, only on the first row of a wrapped line
    pub number: Option<usize>,
    pub text: String,
}

impl LogViewerViewModel {
    /// Build the view model for a content area of `width` x `height` cells
    pub fn new(state: &LogViewerState, keymap: &Keymap, width: usize, height: usize) -> Self {
        let status = &state.status;

        let gutter_width = if state.show_line_numbers {
            gutter_width(state.line_count)
        } else {
            0
        };
        // Gutter plus one separator column
        let text_width = width.saturating_sub(if gutter_width > 0 { gutter_width + 1 } else { 0 });
        let wrap_at = if !state.wrap_lines {
            None
        } else if state.wrap_width > 0 {
            Some(usize::from(state.wrap_width))
        } else {
            Some(text_width.max(1))
        };

        let rows = visible_rows(
            &state.text,
            state.line_count,
            state.scroll_offset,
            height,
            wrap_at,
        );
        let placeholder = state.text.is_empty().then_some("no log content");

        Self {
            title: title(status),
            follow_label: follow_label(state),
            info: info_fields(status),
            notice: notice(status),
            toolbar: toolbar(state),
            rows,
            gutter_width,
            placeholder,
            hints: FOOTER_COMMANDS
                .iter()
                .filter_map(|cmd| Some((keymap.compact_hint_for_command(*cmd)?, cmd.title())))
                .collect(),
        }
    }
}

/// Human readable size, whole units only (1536 bytes is "1 KB")
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{} KB", bytes / KB)
    } else {
        format!("{} MB", bytes / MB)
    }
}

/// Modification time in local time, e.g. `2025-03-01 14:32:05`
pub fn format_modified(modified: SystemTime) -> String {
    DateTime::<Local>::from(modified)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

fn gutter_width(line_count: usize) -> usize {
    line_count.to_string().len().max(MIN_GUTTER_WIDTH)
}

fn title(status: &TailStatus) -> String {
    let name = status
        .path
        .as_deref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned());

    match name {
        Some(name) => format!(" {} ", name),
        None => " Log ".to_string(),
    }
}

fn follow_label(state: &LogViewerState) -> String {
    if state.status.cleared {
        " paused (cleared) ".to_string()
    } else if state.is_following() {
        " ● following ".to_string()
    } else {
        format!(" ↓ {} more ", state.scroll_offset)
    }
}

fn info_fields(status: &TailStatus) -> Vec<InfoField> {
    let unknown = || "-".to_string();

    let file = status
        .path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(unknown);
    let size = status.file.map(|f| format_size(f.size)).unwrap_or_else(unknown);
    let modified = status
        .file
        .and_then(|f| f.modified)
        .map(format_modified)
        .unwrap_or_else(unknown);
    let position = match status.file {
        Some(f) => format!("{} / {}", status.offset, f.size),
        None => format!("{} / -", status.offset),
    };

    vec![
        InfoField {
            label: "File",
            value: file,
        },
        InfoField {
            label: "Size",
            value: size,
        },
        InfoField {
            label: "Modified",
            value: modified,
        },
        InfoField {
            label: "Position",
            value: position,
        },
    ]
}

fn notice(status: &TailStatus) -> Option<Notice> {
    match &status.path {
        None => Some(Notice {
            kind: NoticeKind::Idle,
            text: "Please open a log file (press o)".to_string(),
        }),
        Some(path) if status.file.is_none() => Some(Notice {
            kind: NoticeKind::Missing,
            text: format!("file not found: {}", path.display()),
        }),
        Some(_) if status.cleared => Some(Notice {
            kind: NoticeKind::Cleared,
            text: "Content cleared, the next refresh re-reads the file".to_string(),
        }),
        Some(_) => None,
    }
}

fn toolbar(state: &LogViewerState) -> Vec<ToolbarItem> {
    let policy = state.status.policy;
    let wrap_width = match state.wrap_width {
        0 => "fit".to_string(),
        w => w.to_string(),
    };

    vec![
        ToolbarItem {
            label: "Auto refresh".to_string(),
            active: policy.auto_refresh,
        },
        ToolbarItem {
            label: format!("Every {:.1}s", state.status.interval().as_secs_f64()),
            active: policy.auto_refresh,
        },
        ToolbarItem {
            label: "Line numbers".to_string(),
            active: state.show_line_numbers,
        },
        ToolbarItem {
            label: "Wrap".to_string(),
            active: state.wrap_lines,
        },
        ToolbarItem {
            label: format!("Width {}", wrap_width),
            active: state.wrap_lines,
        },
    ]
}

/// Rows to show, with the line `offset` lines above the last one at the
/// bottom of the area
///
/// Wrapped lines that do not fit completely at the top are cut, so the
/// bottom line is always shown in full. If there is not enough content above
/// to fill the area, lines below the bottom line are used.
pub fn visible_rows(
    text: &str,
    line_count: usize,
    offset: usize,
    height: usize,
    wrap_at: Option<usize>,
) -> Vec<DisplayRow> {
    let mut rows: Vec<DisplayRow> = Vec::with_capacity(height);

    for (index, line) in text.lines().rev().enumerate().skip(offset) {
        if rows.len() >= height {
            break;
        }
        let number = line_count.saturating_sub(index);
        let pieces = split_line(line, wrap_at);
        for (i, piece) in pieces.into_iter().enumerate().rev() {
            if rows.len() >= height {
                break;
            }
            rows.push(DisplayRow {
                number: (i == 0).then_some(number),
                text: piece,
            });
        }
    }
    rows.reverse();

    if rows.len() < height && offset > 0 {
        let first_below = line_count.saturating_sub(offset);
        'fill: for (index, line) in text.lines().enumerate().skip(first_below) {
            for (i, piece) in split_line(line, wrap_at).into_iter().enumerate() {
                if rows.len() >= height {
                    break 'fill;
                }
                rows.push(DisplayRow {
                    number: (i == 0).then_some(index + 1),
                    text: piece,
                });
            }
        }
    }

    rows
}

/// Expand tabs, replace other control characters and hard-wrap at `wrap_at`
fn split_line(line: &str, wrap_at: Option<usize>) -> Vec<String> {
    let mut chars: Vec<char> = Vec::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '\t' => chars.extend(std::iter::repeat_n(' ', TAB_WIDTH)),
            c if c.is_control() => chars.push('\u{fffd}'),
            c => chars.push(c),
        }
    }

    match wrap_at {
        Some(width) if width > 0 && chars.len() > width => chars
            .chunks(width)
            .map(|chunk| chunk.iter().collect())
            .collect(),
        _ => vec![chars.into_iter().collect()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybindings::default_keymap;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Duration;
    use tailview_core::FileStat;

    fn row(number: Option<usize>, text: &str) -> DisplayRow {
        DisplayRow {
            number,
            text: text.to_string(),
        }
    }

    fn numbered(lines: &[(usize, &str)]) -> Vec<DisplayRow> {
        lines.iter().map(|(n, t)| row(Some(*n), t)).collect()
    }

    const FIVE: &str = "one\ntwo\nthree\nfour\nfive\n";

    #[test]
    fn test_format_size_uses_whole_units() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1 KB");
        assert_eq!(format_size(5 * 1024 * 1024 + 1), "5 MB");
    }

    #[test]
    fn test_following_shows_the_last_lines() {
        assert_eq!(
            visible_rows(FIVE, 5, 0, 3, None),
            numbered(&[(3, "three"), (4, "four"), (5, "five")])
        );
    }

    #[test]
    fn test_offset_moves_the_window_up() {
        assert_eq!(
            visible_rows(FIVE, 5, 1, 2, None),
            numbered(&[(3, "three"), (4, "four")])
        );
    }

    #[test]
    fn test_top_of_file_fills_downwards() {
        assert_eq!(
            visible_rows(FIVE, 5, 4, 3, None),
            numbered(&[(1, "one"), (2, "two"), (3, "three")])
        );
    }

    #[test]
    fn test_short_content_is_not_padded() {
        assert_eq!(
            visible_rows("only\n", 1, 0, 10, None),
            numbered(&[(1, "only")])
        );
        assert!(visible_rows("", 0, 0, 10, None).is_empty());
    }

    #[test]
    fn test_wrap_cuts_partial_line_at_top() {
        let text = "abcdefgh\nxy\n";
        assert_eq!(
            visible_rows(text, 2, 0, 3, Some(3)),
            vec![row(None, "def"), row(None, "gh"), row(Some(2), "xy")]
        );
        assert_eq!(
            visible_rows(text, 2, 0, 5, Some(3)),
            vec![
                row(Some(1), "abc"),
                row(None, "def"),
                row(None, "gh"),
                row(Some(2), "xy"),
            ]
        );
    }

    #[test]
    fn test_tabs_and_control_chars() {
        assert_eq!(
            split_line("a\tb\u{7}", None),
            vec!["a    b\u{fffd}".to_string()]
        );
    }

    #[test]
    fn test_crlf_lines_have_no_carriage_return() {
        assert_eq!(
            visible_rows("a\r\nb\r\n", 2, 0, 5, None),
            numbered(&[(1, "a"), (2, "b")])
        );
    }

    fn state_with(status: TailStatus, text: &str, line_count: usize) -> LogViewerState {
        LogViewerState {
            status,
            text: Arc::from(text),
            line_count,
            ..LogViewerState::default()
        }
    }

    #[test]
    fn test_idle_state() {
        let vm = LogViewerViewModel::new(&LogViewerState::default(), &default_keymap(), 80, 10);
        assert_eq!(vm.notice.map(|n| n.kind), Some(NoticeKind::Idle));
        assert_eq!(vm.placeholder, Some("no log content"));
        assert_eq!(vm.title, " Log ");
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn test_missing_file_banner() {
        let status = TailStatus {
            path: Some(PathBuf::from("/var/log/gone.log")),
            ..TailStatus::default()
        };
        let vm = LogViewerViewModel::new(&state_with(status, "", 0), &default_keymap(), 80, 10);
        assert_eq!(
            vm.notice,
            Some(Notice {
                kind: NoticeKind::Missing,
                text: "file not found: /var/log/gone.log".to_string(),
            })
        );
        assert_eq!(vm.title, " gone.log ");
    }

    #[test]
    fn test_cleared_notice_and_paused_follow() {
        let status = TailStatus {
            path: Some(PathBuf::from("/var/log/app.log")),
            file: Some(FileStat {
                size: 10,
                modified: None,
            }),
            cleared: true,
            ..TailStatus::default()
        };
        let vm = LogViewerViewModel::new(&state_with(status, "", 0), &default_keymap(), 80, 10);
        assert_eq!(vm.notice.map(|n| n.kind), Some(NoticeKind::Cleared));
        assert_eq!(vm.follow_label, " paused (cleared) ");
    }

    #[test]
    fn test_header_fields() {
        let status = TailStatus {
            path: Some(PathBuf::from("/var/log/app.log")),
            offset: 1024,
            file: Some(FileStat {
                size: 2048,
                modified: None,
            }),
            ..TailStatus::default()
        };
        let vm = LogViewerViewModel::new(&state_with(status, "x\n", 1), &default_keymap(), 80, 10);
        let values: Vec<_> = vm.info.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(values, vec!["/var/log/app.log", "2 KB", "-", "1024 / 2048"]);
        assert_eq!(vm.notice, None);
        assert_eq!(vm.follow_label, " ● following ");
    }

    #[test]
    fn test_gutter_and_wrap_width() {
        let mut state = state_with(TailStatus::default(), "0123456789\n", 1);
        state.wrap_lines = true;
        state.wrap_width = 0;

        // 20 columns minus a 4 wide gutter and a separator
        let vm = LogViewerViewModel::new(&state, &default_keymap(), 20, 10);
        assert_eq!(vm.gutter_width, 4);
        assert_eq!(vm.rows.len(), 1);

        let vm = LogViewerViewModel::new(&state, &default_keymap(), 12, 10);
        assert_eq!(vm.rows.len(), 2);

        state.wrap_width = 5;
        state.show_line_numbers = false;
        let vm = LogViewerViewModel::new(&state, &default_keymap(), 80, 10);
        assert_eq!(vm.gutter_width, 0);
        assert_eq!(
            vm.rows,
            vec![row(Some(1), "01234"), row(None, "56789")]
        );
    }

    #[test]
    fn test_toolbar_reflects_policy() {
        let mut state = LogViewerState::default();
        state.status.policy = tailview_core::RefreshPolicy::new(false, Duration::from_millis(2500));
        let vm = LogViewerViewModel::new(&state, &default_keymap(), 80, 10);
        assert!(!vm.toolbar[0].active);
        assert_eq!(vm.toolbar[1].label, "Every 2.5s");
    }

    #[test]
    fn test_footer_hints_come_from_keymap() {
        let vm = LogViewerViewModel::new(&LogViewerState::default(), &default_keymap(), 80, 10);
        assert_eq!(vm.hints.first(), Some(&("o".to_string(), "Open")));
        assert_eq!(vm.hints.last(), Some(&("q".to_string(), "Quit")));
    }
}
