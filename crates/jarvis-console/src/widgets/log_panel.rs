//! Scrolling log widget
//!
//! Displays console activity (commands, responses, errors, system notes) in
//! a scrollable log, newest at the bottom.

use super::color_from_name;
use crate::{ConsoleState, LogEntry};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

pub struct LogPanelWidget;

impl LogPanelWidget {
    /// Render the log panel honoring the state's scroll offset
    pub fn render(state: &ConsoleState, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" LOG ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        block.render(area, buf);

        if state.log.is_empty() {
            let empty_msg = "No activity yet";
            buf.set_string(
                inner.x + 1,
                inner.y,
                empty_msg,
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        let visible = inner.height as usize;
        if visible == 0 {
            return;
        }

        // scroll_offset counts lines up from the bottom; clamp so the view
        // never runs past the oldest entry
        let total = state.log.len();
        let max_offset = total.saturating_sub(visible);
        let offset = state.scroll_offset.min(max_offset);
        let end = total - offset;
        let start = end.saturating_sub(visible);

        for (row, entry) in state.log.iter().skip(start).take(end - start).enumerate() {
            let line = Self::format_entry(entry, inner.width as usize);
            let color = color_from_name(entry.kind.color_name());
            buf.set_string(
                inner.x,
                inner.y + row as u16,
                &line,
                Style::default().fg(color),
            );
        }

        // Scroll indicator when entries are out of view
        if total > visible {
            let scroll_info = format!("{}-{}/{}", start + 1, end, total);
            buf.set_string(
                inner.x + inner.width.saturating_sub(scroll_info.len() as u16 + 1),
                inner.y + inner.height - 1,
                &scroll_info,
                Style::default().fg(Color::DarkGray),
            );
        }
    }

    /// Format a single entry: "HH:MM:SS  icon text", truncated to the width
    fn format_entry(entry: &LogEntry, width: usize) -> String {
        let time = entry.formatted_time();
        let icon = entry.kind.indicator();
        let flat = entry.text.replace(['\n', '\r'], " ");
        // time + two spaces + icon + space
        let max_text = width.saturating_sub(13);
        let text = Self::truncate_text(&flat, max_text);
        format!("{}  {} {}", time, icon, text)
    }

    /// Truncate text to fit width
    fn truncate_text(text: &str, max_len: usize) -> String {
        if text.chars().count() <= max_len {
            text.to_string()
        } else {
            let truncated: String = text.chars().take(max_len.saturating_sub(1)).collect();
            format!("{}…", truncated)
        }
    }
}
