//! View models - presentation data computed from state

mod log_viewer_view_model;
mod status_bar;

pub use log_viewer_view_model::{LogViewerViewModel, NoticeKind};
pub use status_bar::StatusBarViewModel;
