//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! ## Layer 1: Priority Keys
//! Ctrl+C and Esc work regardless of context.
//!
//! ## Layer 2: Capabilities
//! Views with the TEXT_INPUT capability receive character keys as text
//! rather than as hotkeys.
//!
//! ## Layer 3: Keymap + Gating
//! Look up keys in the keymap, then check if the active view accepts the
//! action, so a hotkey never leaks into a view it was not meant for.

use crate::actions::{Action, GlobalAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::keybindings::{KeyMatch, PendingKey};
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware {
    /// Pending key for two-key sequences
    pending_key: Option<PendingKey>,
}

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self { pending_key: None }
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let view = state.active_view();
        let capabilities = view.capabilities(state);

        // Layer 1: priority keys
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        if key.code == KeyCode::Esc {
            self.pending_key = None;
            if capabilities.accepts_text_input() {
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else {
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return;
        }

        // Layer 2: capability-based routing
        if capabilities.accepts_text_input() {
            self.pending_key = None;

            let input = match key.code {
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(TextInputAction::ClearLine)
                }
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    Some(TextInputAction::Char(c))
                }
                KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
                    Some(TextInputAction::ClearLine)
                }
                KeyCode::Backspace => Some(TextInputAction::Backspace),
                KeyCode::Enter => Some(TextInputAction::Confirm),
                _ => None,
            };

            if let Some(input) = input {
                log::debug!("Layer 2: TEXT_INPUT - routing {:?}", input);
                dispatcher.dispatch(Action::TextInput(input));
                return;
            }
        }

        // Layer 3: keymap lookup + gating
        let commands = match state.keymap.match_key(&key, self.pending_key.as_ref()) {
            KeyMatch::Pending(first) if capabilities.supports_vim_vertical_scroll() => {
                log::debug!("Layer 3: Waiting for second key in sequence (first: {})", first);
                self.pending_key = Some(PendingKey::new(first));
                return;
            }
            KeyMatch::Commands(commands) => commands,
            KeyMatch::Pending(_) | KeyMatch::Unbound => Vec::new(),
        };
        self.pending_key = None;

        for command in commands {
            let action = command.to_action();
            if view.accepts_action(&action) {
                log::debug!("Layer 3: Command {:?} accepted by view, dispatching", command);
                dispatcher.dispatch(action);
                return;
            }
            log::debug!(
                "Layer 3: Command {:?} rejected by view {:?}",
                command,
                view.view_id()
            );
        }
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            // Raw keys never reach the reducer
            return false;
        }

        true
    }
}
