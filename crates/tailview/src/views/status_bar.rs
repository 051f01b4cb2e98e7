//! Status Bar Widget
//!
//! Format: `[timestamp] emoji message                     [source]`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Widget for rendering the status bar
pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 || area.width < 4 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        let right = area.x + area.width;
        let mut x = area.x + 1;

        if !vm.timestamp.is_empty() {
            let ts_str = format!("[{}] ", vm.timestamp);
            let (next_x, _) = buf.set_stringn(x, area.y, &ts_str, usize::from(right - x), vm.metadata_style);
            x = next_x;
        }

        let emoji_str = format!("{} ", vm.emoji);
        buf.set_stringn(x, area.y, &emoji_str, usize::from(right.saturating_sub(x)), vm.message_style);
        // Emoji typically renders as 2 cells
        x = x.saturating_add(3).min(right);

        let source_str = if vm.source.is_empty() {
            String::new()
        } else {
            format!("[{}]", vm.source)
        };
        let source_width = source_str.chars().count() as u16;

        let available = right
            .saturating_sub(x)
            .saturating_sub(source_width + 2) as usize;
        let message_width = vm.message.chars().count();

        if message_width > available {
            let truncated: String = vm
                .message
                .chars()
                .take(available.saturating_sub(1))
                .collect();
            buf.set_string(x, area.y, format!("{}…", truncated), vm.message_style);
        } else {
            buf.set_string(x, area.y, &vm.message, vm.message_style);
        }

        if !source_str.is_empty() && source_width + 1 < area.width {
            let source_x = right - source_width - 1;
            buf.set_string(source_x, area.y, &source_str, vm.metadata_style);
        }
    }
}
