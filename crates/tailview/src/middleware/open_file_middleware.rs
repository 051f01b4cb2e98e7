//! Open file prompt middleware
//!
//! Turns a confirmed prompt into a `LogViewer(Open)` and closes the prompt.
//! An empty prompt counts as cancelled and leaves the current source alone.

use crate::actions::{Action, GlobalAction, LogViewerAction, OpenFileAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct OpenFileMiddleware;

impl OpenFileMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OpenFileMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for OpenFileMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::OpenFile(OpenFileAction::Confirm) => {
                match state.open_file.resolved_path() {
                    Some(path) => {
                        dispatcher.dispatch(Action::LogViewer(LogViewerAction::Open(path)));
                    }
                    None => {
                        dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                            "Open cancelled",
                            "open",
                        )));
                    }
                }
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            Action::OpenFile(OpenFileAction::Cancel) => {
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            _ => {}
        }

        // The reducer still resets the prompt
        true
    }
}
