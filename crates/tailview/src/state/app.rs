//! Application State

use crate::keybindings::{default_keymap, Keymap};
use crate::theme::Theme;
use crate::views::{LogViewerView, View};
use tailview_config::AppConfig;

use super::{LogViewerState, OpenFileState, StatusBarState};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    /// Views are rendered bottom-up, so the last view in the stack renders on top
    pub view_stack: Vec<Box<dyn View>>,
    pub log_viewer: LogViewerState,
    pub open_file: OpenFileState,
    pub status_bar: StatusBarState,
    pub theme: Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
    /// Application configuration
    pub app_config: AppConfig,
}

impl AppState {
    pub fn new(app_config: AppConfig) -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(LogViewerView::new())],
            log_viewer: LogViewerState::from_config(&app_config),
            open_file: OpenFileState::default(),
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
            keymap: default_keymap(),
            app_config,
        }
    }

    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> &dyn View {
        self.view_stack
            .last()
            .expect("View stack should never be empty")
            .as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("log_viewer", &self.log_viewer.status)
            .field("open_file", &self.open_file)
            .field("status_bar", &self.status_bar.latest())
            .field("theme", &"<theme>")
            .field("app_config", &self.app_config)
            .finish()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
