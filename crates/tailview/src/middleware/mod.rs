use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod keyboard_middleware;
pub mod log_tail_middleware;
pub mod logging_middleware;
pub mod navigation_middleware;
pub mod open_file_middleware;
pub mod text_input_middleware;

pub use keyboard_middleware::KeyboardMiddleware;
pub use log_tail_middleware::LogTailMiddleware;
pub use logging_middleware::LoggingMiddleware;
pub use navigation_middleware::NavigationMiddleware;
pub use open_file_middleware::OpenFileMiddleware;
pub use text_input_middleware::TextInputMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware performs the side effects (file I/O, timers) so reducers can
/// stay pure.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
