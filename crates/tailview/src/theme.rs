//! Colors and prebuilt styles for the viewer

use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,
    pub bg_toolbar: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,
    pub status_notice: Color,

    // Log content
    pub gutter_fg: Color,
    pub gutter_bg: Color,
    pub log_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c900,
            bg_toolbar: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c300,
            text_muted: tailwind::SLATE.c500,

            accent_primary: tailwind::CYAN.c400,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c500,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,
            status_notice: tailwind::ORANGE.c400,

            gutter_fg: tailwind::SLATE.c500,
            gutter_bg: tailwind::SLATE.c950,
            log_fg: tailwind::SLATE.c200,
        }
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "r" in "r Refresh")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for toggles that are switched on in the toolbar
    pub fn toggle_on(&self) -> Style {
        Style::default()
            .fg(self.bg_primary)
            .bg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn toggle_off(&self) -> Style {
        Style::default().fg(self.text_muted).bg(self.bg_toolbar)
    }

    /// Style for error banners
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for notices that are not errors, e.g. cleared content
    pub fn notice(&self) -> Style {
        Style::default().fg(self.status_notice)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for the line number gutter
    pub fn gutter(&self) -> Style {
        Style::default().fg(self.gutter_fg).bg(self.gutter_bg)
    }

    /// Style for log lines
    pub fn log_line(&self) -> Style {
        Style::default().fg(self.log_fg).bg(self.bg_panel)
    }
}
