//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod log_viewer;
mod open_file;
mod status_bar;

pub use app::AppState;
pub use log_viewer::{LogViewerState, TailStatus, MAX_WRAP_WIDTH};
pub use open_file::OpenFileState;
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
