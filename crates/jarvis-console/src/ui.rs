//! Main UI layout and rendering
//!
//! Defines the overall console layout and delegates to individual widgets.

use crate::{
    app::App,
    widgets::{AgentListWidget, LogPanelWidget},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the entire console UI
pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Main layout: header + content + input bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header (title + keybindings)
            Constraint::Min(0),    // Agent list + log
            Constraint::Length(3), // Input bar
        ])
        .split(size);

    render_header(frame, chunks[0], app);
    render_content(frame, chunks[1], app);
    render_input(frame, chunks[2], app);
}

/// Render the header with title and keybindings
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    // Title + webhook target
    let title = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "JARVIS CONSOLE",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            app.config.api.webhook_url(),
            Style::default().fg(Color::Gray),
        ),
    ])])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, header_chunks[0]);

    // Keybindings
    let keybindings = Paragraph::new(vec![Line::from(vec![
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" quit "),
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" agent "),
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::raw(" send "),
        Span::styled("[↑/↓]", Style::default().fg(Color::Yellow)),
        Span::raw(" scroll"),
    ])])
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Right);
    frame.render_widget(keybindings, header_chunks[1]);
}

/// Render the agent list and log side by side
fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(34), // Agent list
            Constraint::Min(20),    // Log panel
        ])
        .split(area);

    frame.render_widget(
        WidgetAdapter::new(|area, buf| AgentListWidget::render(&app.state, area, buf)),
        chunks[0],
    );

    frame.render_widget(
        WidgetAdapter::new(|area, buf| LogPanelWidget::render(&app.state, area, buf)),
        chunks[1],
    );
}

/// Render the input bar with the selected agent and submission status
fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let agent_label = app
        .state
        .selected_agent()
        .map(|a| format!(" {} {} ", a.icon, a.name))
        .unwrap_or_else(|| " no agent ".to_string());

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(agent_label);

    if app.state.is_submitting {
        block = block.title(
            Line::from(Span::styled(
                " sending… ",
                Style::default().fg(Color::Yellow),
            ))
            .right_aligned(),
        );
    }

    let input_line = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Color::Cyan)),
        Span::raw(app.state.input.clone()),
        Span::styled("▌", Style::default().fg(Color::Cyan)),
    ]);

    frame.render_widget(Paragraph::new(input_line).block(block), area);
}

/// Widget adapter to bridge static render methods to ratatui's Widget trait
struct WidgetAdapter<F>
where
    F: Fn(Rect, &mut Buffer),
{
    render_fn: F,
}

impl<F> WidgetAdapter<F>
where
    F: Fn(Rect, &mut Buffer),
{
    fn new(render_fn: F) -> Self {
        Self { render_fn }
    }
}

impl<F> Widget for WidgetAdapter<F>
where
    F: Fn(Rect, &mut Buffer),
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        (self.render_fn)(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_layout_creation() {
        let rect = Rect::new(0, 0, 100, 30);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(rect);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].height, 3);
        assert_eq!(chunks[2].height, 3);
        assert!(chunks[1].height > 0);
    }
}
