use crate::actions::{Action, GlobalAction, LogViewerAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Once per frame, would drown everything else
            Action::Global(GlobalAction::Tick) => {}
            // Carries the whole buffer
            Action::LogViewer(LogViewerAction::ContentUpdated {
                line_count, reset, ..
            }) => {
                log::trace!("Action: ContentUpdated {{ line_count: {line_count}, reset: {reset} }}");
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true
    }
}
