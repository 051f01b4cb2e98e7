//! Actions module
//!
//! This module defines all actions in the application using a tagged action architecture.
//! Actions are organized by:
//! - Generic actions (Navigation, TextInput) that views translate to screen-specific actions
//! - Global actions that affect the entire application
//! - Screen-specific actions that are already targeted to a particular screen

// Shared action types
pub mod global;
pub mod navigation;
pub mod text_input;

// Screen-specific action types
pub mod log_viewer;
pub mod open_file;
pub mod status_bar;

pub use global::GlobalAction;
pub use log_viewer::LogViewerAction;
pub use navigation::NavigationAction;
pub use open_file::OpenFileAction;
pub use status_bar::StatusBarAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),

    // Global actions (no translation needed)
    /// Global application actions
    Global(GlobalAction),

    // Screen-specific actions (already targeted)
    /// Log viewer panel actions
    LogViewer(LogViewerAction),
    /// Open file prompt actions
    OpenFile(OpenFileAction),
    /// Status bar actions
    StatusBar(StatusBarAction),
}
