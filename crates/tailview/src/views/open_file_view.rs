//! Open File View
//!
//! A small popup asking for the path of the log file to tail. Enter opens
//! the file, Esc or an empty path cancels.

use crate::actions::{Action, GlobalAction, OpenFileAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::views::{View, ViewId};
use ratatui::{prelude::*, widgets::*};

#[derive(Debug, Clone)]
pub struct OpenFileView;

impl OpenFileView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OpenFileView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for OpenFileView {
    fn view_id(&self) -> ViewId {
        ViewId::OpenFile
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let popup = centered_rect(area, 70, 7);

        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.panel_border())
            .title(Span::styled(" Open log file ", theme.panel_title()))
            .style(Style::default().bg(theme.bg_panel));

        let lines = vec![
            Line::from(vec![
                Span::styled("> ", theme.key_hint()),
                Span::styled(state.open_file.input.as_str(), theme.text()),
                Span::styled("█", Style::default().fg(theme.accent_primary)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Filters: ", theme.muted()),
                Span::styled(state.app_config.filter_hint(), theme.key_description()),
            ]),
            Line::from(vec![
                Span::styled("Enter", theme.key_hint()),
                Span::styled(" open  ", theme.key_description()),
                Span::styled("Esc", theme.key_hint()),
                Span::styled(" cancel  ", theme.key_description()),
                Span::styled("Ctrl+U", theme.key_hint()),
                Span::styled(" clear", theme.key_description()),
            ]),
        ];

        f.render_widget(Paragraph::new(lines).block(block), popup);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => OpenFileAction::Char(c),
            TextInputAction::Backspace => OpenFileAction::Backspace,
            TextInputAction::ClearLine => OpenFileAction::ClearLine,
            TextInputAction::Confirm => OpenFileAction::Confirm,
            TextInputAction::Escape => OpenFileAction::Cancel,
        };
        Some(Action::OpenFile(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::OpenFile(_)
                | Action::TextInput(_)
                | Action::Global(GlobalAction::Quit | GlobalAction::Close)
        )
    }
}

/// Rect of `percent_x` percent width and a fixed height, centered in `area`
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let height = height.min(area.height);
    let scaled = u32::from(area.width) * u32::from(percent_x) / 100;
    let width = u16::try_from(scaled).unwrap_or(area.width).max(40).min(area.width);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_cancels() {
        assert!(matches!(
            OpenFileView::new().translate_text_input(TextInputAction::Escape),
            Some(Action::OpenFile(OpenFileAction::Cancel))
        ));
    }

    #[test]
    fn test_rejects_log_viewer_actions() {
        let view = OpenFileView::new();
        assert!(!view.accepts_action(&Action::LogViewer(
            crate::actions::LogViewerAction::Refresh
        )));
        assert!(view.accepts_action(&Action::Global(GlobalAction::Quit)));
    }

    #[test]
    fn test_centered_rect_fits_small_areas() {
        let rect = centered_rect(Rect::new(0, 0, 30, 5), 70, 7);
        assert_eq!(rect, Rect::new(0, 0, 30, 5));

        let rect = centered_rect(Rect::new(0, 0, 100, 40), 70, 7);
        assert_eq!(rect, Rect::new(15, 16, 70, 7));
    }
}
