//! Console widgets module
//!
//! Ratatui-based widgets for the Jarvis console. Each widget renders from
//! [`crate::ConsoleState`] only, so the projection can be swapped without
//! touching the submission flow.

use ratatui::style::Color;

mod agent_list;
mod log_panel;

pub use agent_list::AgentListWidget;
pub use log_panel::LogPanelWidget;

/// Convert a color name string to a ratatui Color.
///
/// Shared utility covering agent accent colors (from `Agent::color`) and
/// log entry colors (from `LogKind::color_name()`).
pub fn color_from_name(color_name: &str) -> Color {
    match color_name {
        "gray" => Color::DarkGray,
        "yellow" => Color::Yellow,
        "green" => Color::Green,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "cyan" => Color::Cyan,
        "magenta" => Color::Magenta,
        _ => Color::White,
    }
}
