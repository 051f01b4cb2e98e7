//! Command identifiers
//!
//! Every hotkey triggers a command. Commands are referenced by keybindings
//! and the footer hints, and can be serialized for future keymap files.

use serde::{Deserialize, Serialize};

use crate::actions::{Action, GlobalAction, LogViewerAction, NavigationAction};
use crate::views::OpenFileView;

/// Unique identifier for each command in the application.
///
/// The enum is serialized as snake_case (e.g., `LogRefresh` -> `"log_refresh"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Navigation ===
    /// Scroll one line towards older content
    NavigatePrevious,
    /// Scroll one line towards newer content
    NavigateNext,
    ScrollPageUp,
    ScrollPageDown,
    /// Jump to the first line (gg in vim)
    NavigateToTop,
    /// Jump to the newest line and follow again (G in vim)
    NavigateToBottom,

    // === Log source ===
    /// Prompt for a log file to open
    LogOpen,
    /// Clear the display; the next refresh reloads the file
    LogClear,
    /// Refresh now
    LogRefresh,
    /// Switch between automatic and manual refresh
    LogToggleAutoRefresh,
    LogIncreaseInterval,
    LogDecreaseInterval,

    // === Display ===
    ViewToggleLineNumbers,
    ViewToggleWrap,
    ViewWidenWrap,
    ViewNarrowWrap,

    // === General ===
    /// Close the current view/panel
    GlobalClose,
    /// Quit the application
    GlobalQuit,
}

impl CommandId {
    /// Convert this command ID to an Action
    pub fn to_action(self) -> Action {
        match self {
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::ScrollPageUp => Action::Navigate(NavigationAction::PageUp),
            Self::ScrollPageDown => Action::Navigate(NavigationAction::PageDown),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),

            Self::LogOpen => Action::Global(GlobalAction::PushView(Box::new(OpenFileView::new()))),
            Self::LogClear => Action::LogViewer(LogViewerAction::Clear),
            Self::LogRefresh => Action::LogViewer(LogViewerAction::Refresh),
            Self::LogToggleAutoRefresh => Action::LogViewer(LogViewerAction::ToggleAutoRefresh),
            Self::LogIncreaseInterval => Action::LogViewer(LogViewerAction::IncreaseInterval),
            Self::LogDecreaseInterval => Action::LogViewer(LogViewerAction::DecreaseInterval),

            Self::ViewToggleLineNumbers => Action::LogViewer(LogViewerAction::ToggleLineNumbers),
            Self::ViewToggleWrap => Action::LogViewer(LogViewerAction::ToggleWrap),
            Self::ViewWidenWrap => Action::LogViewer(LogViewerAction::WidenWrap),
            Self::ViewNarrowWrap => Action::LogViewer(LogViewerAction::NarrowWrap),

            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Short label for the footer hints
    pub fn title(&self) -> &'static str {
        match self {
            Self::NavigatePrevious => "Up",
            Self::NavigateNext => "Down",
            Self::ScrollPageUp => "Page up",
            Self::ScrollPageDown => "Page down",
            Self::NavigateToTop => "Top",
            Self::NavigateToBottom => "Follow",
            Self::LogOpen => "Open",
            Self::LogClear => "Clear",
            Self::LogRefresh => "Refresh",
            Self::LogToggleAutoRefresh => "Auto",
            Self::LogIncreaseInterval => "Slower",
            Self::LogDecreaseInterval => "Faster",
            Self::ViewToggleLineNumbers => "Line numbers",
            Self::ViewToggleWrap => "Wrap",
            Self::ViewWidenWrap => "Wider",
            Self::ViewNarrowWrap => "Narrower",
            Self::GlobalClose => "Close",
            Self::GlobalQuit => "Quit",
        }
    }
}
