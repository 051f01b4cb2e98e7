//! Reducers - pure functions from (state, action) to state

pub mod app_reducer;
pub mod log_viewer_reducer;
pub mod open_file_reducer;
pub mod status_bar_reducer;
