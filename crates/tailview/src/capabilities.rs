//! View capability system
//!
//! Views declare what kind of input they can handle, so the keyboard
//! middleware can route keys without knowing about concrete views.
//!
//! For example, a prompt with TEXT_INPUT receives plain characters as text,
//! while the log viewer receives them as hotkeys.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// View can scroll vertically (has content that extends beyond viewport)
        const SCROLL_VERTICAL = 1 << 0;

        /// View supports vim-style scrolling keybindings (gg, G, etc.)
        const VIM_SCROLL_BINDINGS = 1 << 1;

        /// View accepts typed text; character keys are not hotkeys
        const TEXT_INPUT = 1 << 2;
    }
}

impl PanelCapabilities {
    /// Check if the view supports vim-style vertical scrolling
    pub fn supports_vim_vertical_scroll(self) -> bool {
        self.contains(Self::SCROLL_VERTICAL | Self::VIM_SCROLL_BINDINGS)
    }

    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}
