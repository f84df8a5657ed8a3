//! Shared console state types
//!
//! These types define the contract between the submission flow and the UI
//! widgets: agents with a selection marker, the capped scrolling log, the
//! input buffer, and the submission lock.

use chrono::{DateTime, Utc};
use jarvis_core::Agent;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Log entry categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogKind {
    /// Console lifecycle messages
    System,
    /// A command the user dispatched
    Command,
    /// Webhook response body
    Response,
    /// Validation or delivery failure
    Error,
}

impl LogKind {
    /// Entry indicator character for the log panel
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::System => "·",
            Self::Command => "❯",
            Self::Response => "✓",
            Self::Error => "✗",
        }
    }

    /// Entry color (for ratatui styling)
    pub fn color_name(&self) -> &'static str {
        match self {
            Self::System => "gray",
            Self::Command => "cyan",
            Self::Response => "green",
            Self::Error => "red",
        }
    }
}

/// Single entry in the console log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the entry was appended
    pub timestamp: DateTime<Utc>,
    /// Entry category
    pub kind: LogKind,
    /// Display text
    pub text: String,
}

impl LogEntry {
    pub fn new(kind: LogKind, text: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            text: text.into(),
        }
    }

    /// Format for display in the log panel
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Console state - the main data container
#[derive(Debug, Clone)]
pub struct ConsoleState {
    /// Agent catalog, in display order
    pub agents: Vec<Agent>,
    /// Index of the selected agent, always an enabled one
    pub selected: Option<usize>,
    /// Current input buffer
    pub input: String,
    /// Scrolling log, newest at the back
    pub log: VecDeque<LogEntry>,
    /// Lines scrolled up from the bottom of the log; 0 = pinned to newest
    pub scroll_offset: usize,
    /// Reset the scroll to the newest entry on append
    pub auto_scroll: bool,
    /// Submission lock: true while a command is in flight
    pub is_submitting: bool,
    /// Log cap; oldest entries are dropped first
    pub max_log_entries: usize,
}

impl ConsoleState {
    /// Create console state with the first enabled agent selected
    pub fn new(agents: Vec<Agent>, max_log_entries: usize, auto_scroll: bool) -> Self {
        let selected = agents.iter().position(|a| a.enabled);
        Self {
            agents,
            selected,
            input: String::new(),
            log: VecDeque::new(),
            scroll_offset: 0,
            auto_scroll,
            is_submitting: false,
            max_log_entries,
        }
    }

    /// The currently selected agent, if any
    pub fn selected_agent(&self) -> Option<&Agent> {
        self.selected.and_then(|i| self.agents.get(i))
    }

    /// Move selection forward to the next enabled agent, wrapping around
    pub fn select_next_agent(&mut self) {
        self.cycle_selection(1);
    }

    /// Move selection backward to the previous enabled agent, wrapping around
    pub fn select_prev_agent(&mut self) {
        self.cycle_selection(-1);
    }

    fn cycle_selection(&mut self, step: isize) {
        let len = self.agents.len();
        if len == 0 {
            return;
        }
        let Some(current) = self.selected else {
            self.selected = self.agents.iter().position(|a| a.enabled);
            return;
        };

        let mut index = current;
        for _ in 0..len {
            index = (index as isize + step).rem_euclid(len as isize) as usize;
            if self.agents[index].enabled {
                self.selected = Some(index);
                return;
            }
        }
        // No other enabled agent; selection stays put
    }

    /// Append a log entry, enforcing the cap
    pub fn push_entry(&mut self, kind: LogKind, text: impl Into<String>) {
        self.log.push_back(LogEntry::new(kind, text));
        while self.log.len() > self.max_log_entries {
            self.log.pop_front();
        }
        if self.auto_scroll {
            self.scroll_offset = 0;
        }
    }

    /// Scroll the log view toward older entries
    pub fn scroll_up(&mut self, lines: usize) {
        let max_offset = self.log.len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.saturating_add(lines).min(max_offset);
    }

    /// Scroll the log view toward newer entries
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(id: &str, enabled: bool) -> Agent {
        Agent {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            icon: "·".to_string(),
            color: "green".to_string(),
            enabled,
        }
    }

    #[test]
    fn test_first_enabled_agent_selected() {
        let state = ConsoleState::new(
            vec![agent("a", false), agent("b", true), agent("c", true)],
            100,
            true,
        );
        assert_eq!(state.selected, Some(1));
        assert_eq!(state.selected_agent().unwrap().id, "b");
    }

    #[test]
    fn test_no_enabled_agents_means_no_selection() {
        let state = ConsoleState::new(vec![agent("a", false)], 100, true);
        assert!(state.selected.is_none());
        assert!(state.selected_agent().is_none());
    }

    #[test]
    fn test_selection_skips_disabled_agents() {
        let mut state = ConsoleState::new(
            vec![agent("a", true), agent("b", false), agent("c", true)],
            100,
            true,
        );
        assert_eq!(state.selected, Some(0));

        state.select_next_agent();
        assert_eq!(state.selected, Some(2));

        state.select_next_agent();
        assert_eq!(state.selected, Some(0));

        state.select_prev_agent();
        assert_eq!(state.selected, Some(2));
    }

    #[test]
    fn test_single_enabled_agent_selection_wraps_to_itself() {
        let mut state =
            ConsoleState::new(vec![agent("a", true), agent("b", false)], 100, true);
        state.select_next_agent();
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn test_log_cap_drops_oldest() {
        let mut state = ConsoleState::new(vec![agent("a", true)], 3, true);
        for i in 0..5 {
            state.push_entry(LogKind::System, format!("entry {}", i));
        }
        assert_eq!(state.log.len(), 3);
        assert_eq!(state.log.front().unwrap().text, "entry 2");
        assert_eq!(state.log.back().unwrap().text, "entry 4");
    }

    #[test]
    fn test_auto_scroll_pins_to_newest() {
        let mut state = ConsoleState::new(vec![agent("a", true)], 100, true);
        for i in 0..10 {
            state.push_entry(LogKind::System, format!("entry {}", i));
        }
        state.scroll_up(5);
        assert_eq!(state.scroll_offset, 5);

        state.push_entry(LogKind::System, "newest");
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_manual_scroll_persists_without_auto_scroll() {
        let mut state = ConsoleState::new(vec![agent("a", true)], 100, false);
        for i in 0..10 {
            state.push_entry(LogKind::System, format!("entry {}", i));
        }
        state.scroll_up(4);
        state.push_entry(LogKind::System, "newest");
        assert_eq!(state.scroll_offset, 4);

        state.scroll_down(10);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_up_clamps_to_log_length() {
        let mut state = ConsoleState::new(vec![agent("a", true)], 100, false);
        for i in 0..4 {
            state.push_entry(LogKind::System, format!("entry {}", i));
        }
        state.scroll_up(100);
        assert_eq!(state.scroll_offset, 3);
    }

    #[test]
    fn test_log_kind_indicators() {
        assert_eq!(LogKind::Command.indicator(), "❯");
        assert_eq!(LogKind::Response.indicator(), "✓");
        assert_eq!(LogKind::Error.indicator(), "✗");
        assert_eq!(LogKind::Error.color_name(), "red");
    }
}
