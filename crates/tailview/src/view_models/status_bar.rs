//! Status Bar View Model

use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub emoji: &'static str,
    pub message: String,
    /// Timestamp formatted for display (e.g., "14:32:05")
    pub timestamp: String,
    /// What triggered the message, shown on the right
    pub source: String,
    pub message_style: Style,
    pub bg_color: Color,
    /// Style for timestamp and source
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;

        match state.status_bar.latest() {
            Some(msg) => {
                let fg_color = match msg.kind {
                    StatusKind::Success => theme.status_success,
                    StatusKind::Warning => theme.status_warning,
                    StatusKind::Info => theme.status_info,
                };

                Self {
                    emoji: msg.kind.emoji(),
                    message: msg.message.clone(),
                    timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
                    source: msg.source.clone(),
                    message_style: Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
                    bg_color: theme.bg_primary,
                    metadata_style: Style::default().fg(theme.text_muted),
                }
            }
            None => Self {
                emoji: "📜",
                message: "tailview - press o to open a log file".to_string(),
                timestamp: String::new(),
                source: String::new(),
                message_style: Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
                bg_color: theme.bg_primary,
                metadata_style: Style::default().fg(theme.text_muted),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusMessage;

    #[test]
    fn test_latest_message_is_shown() {
        let mut state = AppState::default();
        state
            .status_bar
            .push(StatusMessage::new(StatusKind::Warning, "file not found: /x", "auto refresh"));

        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.message, "file not found: /x");
        assert_eq!(vm.source, "auto refresh");
        assert_eq!(vm.emoji, StatusKind::Warning.emoji());
        assert_eq!(vm.timestamp.len(), 8);
    }

    #[test]
    fn test_welcome_without_messages() {
        let vm = StatusBarViewModel::from_state(&AppState::default());
        assert!(vm.timestamp.is_empty());
        assert!(vm.message.contains("open a log file"));
    }
}
