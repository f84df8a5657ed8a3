//! Main run loop for the console application
//!
//! Handles terminal initialization, the event loop, outcome draining, and
//! cleanup.

use crate::{
    app::{App, SubmitOutcome},
    event::{self, AppEvent, InputEdit},
    terminal, ui, Result,
};
use jarvis_client::WebhookClient;
use jarvis_core::JarvisConfig;
use std::time::Duration;
use tokio::sync::mpsc;

/// Main entry point for running the console
pub async fn run(config: JarvisConfig, client: WebhookClient) -> Result<()> {
    // Initialize terminal
    let mut terminal = terminal::init()?;

    // Create terminal guard for cleanup on panic
    let _guard = terminal::TerminalGuard::new();

    // Channel delivering completed submissions back to this loop
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<SubmitOutcome>();

    let mut app = App::new(config, client);
    app.push_system("Jarvis Console initialized. Ready for commands.");

    let tick = Duration::from_millis(app.config.console.tick_ms);

    // Main event loop
    loop {
        // Draw current state
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Apply any submissions that settled since the last pass
        while let Ok(outcome) = outcome_rx.try_recv() {
            app.finish_submission(outcome);
        }

        // Poll for events with a short timeout
        match event::poll_event(tick)? {
            Some(AppEvent::Key(key)) => {
                if event::is_quit_event(key) {
                    break;
                } else if event::is_submit_event(key) {
                    app.submit(outcome_tx.clone());
                } else if event::is_next_agent_event(key) {
                    app.state.select_next_agent();
                } else if event::is_prev_agent_event(key) {
                    app.state.select_prev_agent();
                } else if let Some((up, lines)) = event::scroll_amount(key) {
                    if up {
                        app.state.scroll_up(lines);
                    } else {
                        app.state.scroll_down(lines);
                    }
                } else if let Some(edit) = event::input_edit(key) {
                    match edit {
                        InputEdit::Insert(c) => app.push_input(c),
                        InputEdit::DeleteBack => app.pop_input(),
                    }
                }
            }
            Some(AppEvent::Resize(_, _)) => {
                // Terminal was resized, will redraw on next iteration
            }
            Some(AppEvent::Tick) | None => {
                // Just a tick, continue
            }
        }

        // Check application quit flag
        if app.should_quit {
            break;
        }
    }

    // Restore terminal state
    terminal::restore()?;

    Ok(())
}
