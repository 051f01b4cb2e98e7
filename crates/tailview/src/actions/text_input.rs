//! Generic text input actions
//!
//! Routed to views with the TEXT_INPUT capability.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    Char(char),
    Backspace,
    ClearLine,
    Escape,
    Confirm,
}
