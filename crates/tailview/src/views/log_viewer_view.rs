//! Log Viewer View
//!
//! The base view: toolbar, file info header, the log content and the
//! status bar.

use crate::actions::{Action, LogViewerAction, NavigationAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::{LogViewerViewModel, NoticeKind, StatusBarViewModel};
use crate::views::status_bar::StatusBarWidget;
use crate::views::{View, ViewId};
use ratatui::{prelude::*, widgets::*};

/// Log viewer - shows the tailed file
#[derive(Debug, Clone)]
pub struct LogViewerView;

impl LogViewerView {
    pub fn new() -> Self {
        Self
    }

    /// Size of the log content area (inside the border) for a frame of `area`
    pub fn content_size(area: Rect) -> (usize, usize) {
        let inner = Block::default()
            .borders(Borders::ALL)
            .inner(split(area).content);
        (usize::from(inner.width), usize::from(inner.height))
    }
}

impl Default for LogViewerView {
    fn default() -> Self {
        Self::new()
    }
}

struct Areas {
    toolbar: Rect,
    header: Rect,
    content: Rect,
    footer: Rect,
    status_bar: Rect,
}

fn split(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Toolbar
            Constraint::Length(3), // File info + notice
            Constraint::Min(3),    // Log content
            Constraint::Length(1), // Key hints
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    Areas {
        toolbar: chunks[0],
        header: chunks[1],
        content: chunks[2],
        footer: chunks[3],
        status_bar: chunks[4],
    }
}

impl View for LogViewerView {
    fn view_id(&self) -> ViewId {
        ViewId::LogViewer
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let areas = split(area);
        let theme = &state.theme;

        let (width, height) = Self::content_size(area);
        let vm = LogViewerViewModel::new(&state.log_viewer, &state.keymap, width, height);

        f.render_widget(
            Block::default().style(Style::default().bg(theme.bg_primary)),
            area,
        );
        render_toolbar(f, &vm, theme, areas.toolbar);
        render_header(f, &vm, theme, areas.header);
        render_content(f, &vm, theme, areas.content);
        render_footer(f, &vm, theme, areas.footer);

        let status_vm = StatusBarViewModel::from_state(state);
        f.render_widget(StatusBarWidget(&status_vm), areas.status_bar);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::SCROLL_VERTICAL | PanelCapabilities::VIM_SCROLL_BINDINGS
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        // Offsets count from the bottom: "next" moves towards newer lines
        let action = match nav {
            NavigationAction::Next => LogViewerAction::ScrollDown(1),
            NavigationAction::Previous => LogViewerAction::ScrollUp(1),
            NavigationAction::PageDown => LogViewerAction::PageDown,
            NavigationAction::PageUp => LogViewerAction::PageUp,
            NavigationAction::ToTop => LogViewerAction::ScrollToTop,
            NavigationAction::ToBottom => LogViewerAction::ScrollToBottom,
        };
        Some(Action::LogViewer(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::LogViewer(_) | Action::Navigate(_) | Action::Global(_)
        )
    }
}

fn render_toolbar(f: &mut Frame, vm: &LogViewerViewModel, theme: &Theme, area: Rect) {
    let mut spans = vec![Span::styled(" tailview ", theme.panel_title())];
    for item in &vm.toolbar {
        let style = if item.active {
            theme.toggle_on()
        } else {
            theme.toggle_off()
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", item.label), style));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg_toolbar)),
        area,
    );
}

fn render_header(f: &mut Frame, vm: &LogViewerViewModel, theme: &Theme, area: Rect) {
    let field = |label: &str, value: &str| {
        vec![
            Span::styled(format!("{}: ", label), theme.muted()),
            Span::styled(value.to_string(), theme.text()),
        ]
    };

    let mut lines = Vec::with_capacity(3);

    // First field gets its own line, the path can be long
    if let Some((first, rest)) = vm.info.split_first() {
        let mut line = vec![Span::raw(" ")];
        line.extend(field(first.label, &first.value));
        lines.push(Line::from(line));

        let mut line = vec![Span::raw(" ")];
        for (i, info) in rest.iter().enumerate() {
            if i > 0 {
                line.push(Span::styled("  │  ", theme.muted()));
            }
            line.extend(field(info.label, &info.value));
        }
        lines.push(Line::from(line));
    }

    if let Some(notice) = &vm.notice {
        let style = match notice.kind {
            NoticeKind::Idle => theme.muted().add_modifier(Modifier::ITALIC),
            NoticeKind::Cleared => theme.notice(),
            NoticeKind::Missing => theme.error(),
        };
        lines.push(Line::from(Span::styled(format!(" {}", notice.text), style)));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn render_content(f: &mut Frame, vm: &LogViewerViewModel, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title(Span::styled(vm.title.clone(), theme.panel_title()))
        .title_bottom(Line::from(Span::styled(vm.follow_label.clone(), theme.muted())).right_aligned())
        .style(Style::default().bg(theme.bg_panel));

    if let Some(placeholder) = vm.placeholder {
        let paragraph = Paragraph::new(placeholder)
            .block(block)
            .style(theme.muted())
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let lines: Vec<Line> = vm
        .rows
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(2);
            if vm.gutter_width > 0 {
                let gutter = match row.number {
                    Some(n) => format!("{:>width$} ", n, width = vm.gutter_width),
                    None => " ".repeat(vm.gutter_width + 1),
                };
                spans.push(Span::styled(gutter, theme.gutter()));
            }
            spans.push(Span::styled(row.text.as_str(), theme.log_line()));
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer(f: &mut Frame, vm: &LogViewerViewModel, theme: &Theme, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (keys, description) in &vm.hints {
        spans.push(Span::styled(keys.as_str(), theme.key_hint()));
        spans.push(Span::styled(format!(" {}  ", description), theme.key_description()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn screen(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| LogViewerView::new().render(state, f.area(), f))
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_content_size_excludes_chrome() {
        // 1 toolbar + 3 header + 2 border + 1 footer + 1 status bar
        assert_eq!(LogViewerView::content_size(Rect::new(0, 0, 80, 24)), (78, 16));
    }

    #[test]
    fn test_renders_numbered_lines() {
        let mut state = AppState::default();
        state.log_viewer.status.path = Some(PathBuf::from("/tmp/app.log"));
        state.log_viewer.text = Arc::from("first line\nsecond line\n");
        state.log_viewer.line_count = 2;

        let screen = screen(&state, 80, 24);
        assert!(screen.contains("   1 first line"));
        assert!(screen.contains("   2 second line"));
        assert!(screen.contains("app.log"));
    }

    #[test]
    fn test_renders_placeholder_and_idle_notice() {
        let screen = screen(&AppState::default(), 80, 24);
        assert!(screen.contains("no log content"));
        assert!(screen.contains("Please open a log file"));
    }

    #[test]
    fn test_navigation_is_translated() {
        let view = LogViewerView::new();
        assert!(matches!(
            view.translate_navigation(NavigationAction::Previous),
            Some(Action::LogViewer(LogViewerAction::ScrollUp(1)))
        ));
        assert!(matches!(
            view.translate_navigation(NavigationAction::ToBottom),
            Some(Action::LogViewer(LogViewerAction::ScrollToBottom))
        ));
    }
}
