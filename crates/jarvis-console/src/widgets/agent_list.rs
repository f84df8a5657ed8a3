//! Agent list widget
//!
//! Displays the agent catalog with the current selection marked. Disabled
//! agents are rendered dimmed and are never selectable.

use super::color_from_name;
use crate::ConsoleState;
use jarvis_core::Agent;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

pub struct AgentListWidget;

impl AgentListWidget {
    /// Render the agent list
    pub fn render(state: &ConsoleState, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" AGENTS ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        block.render(area, buf);

        if state.agents.is_empty() {
            let empty_msg = "No agents configured";
            buf.set_string(
                inner.x + 1,
                inner.y,
                empty_msg,
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        let items: Vec<ListItem> = state
            .agents
            .iter()
            .enumerate()
            .map(|(i, agent)| Self::agent_item(agent, state.selected == Some(i)))
            .collect();

        let list = List::new(items);
        Widget::render(list, inner, buf);
    }

    /// Create a two-line list item for an agent
    fn agent_item(agent: &Agent, selected: bool) -> ListItem<'static> {
        let accent = color_from_name(&agent.color);
        let marker = if selected { "▸" } else { " " };

        let name_style = if !agent.enabled {
            Style::default().fg(Color::DarkGray)
        } else if selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let title = Line::from(vec![
            Span::styled(format!("{} ", marker), Style::default().fg(Color::Yellow)),
            Span::styled(format!("{} ", agent.icon), Style::default().fg(accent)),
            Span::styled(agent.name.clone(), name_style),
        ]);

        let description = if agent.enabled {
            agent.description.clone()
        } else {
            format!("{} (disabled)", agent.description)
        };
        let detail = Line::from(vec![
            Span::raw("   "),
            Span::styled(description, Style::default().fg(Color::Gray)),
        ]);

        ListItem::new(vec![title, detail])
    }
}
