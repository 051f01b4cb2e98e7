//! Generic navigation actions
//!
//! Views translate these into their own scroll actions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    Next,
    Previous,
    PageDown,
    PageUp,
    ToTop,
    ToBottom,
}
