//! Main application state and submission flow
//!
//! The `App` struct owns the console state and the injected webhook client,
//! and enforces the at-most-one-in-flight submission rule.

use crate::{ConsoleState, LogKind};
use jarvis_client::WebhookClient;
use jarvis_core::{validate_command, ErrorInfo, JarvisConfig, JarvisError};
use serde_json::Map;
use tokio::sync::mpsc;

/// Outcome of one webhook submission, delivered back to the event loop
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Response body text from a successful delivery
    Success(String),
    /// Display info for a failed delivery
    Failure(ErrorInfo),
}

/// Main application state
///
/// Collaborators are injected at construction; the app holds no global
/// state and the client can be swapped in tests.
pub struct App {
    /// Console state (agents, log, input, submission lock)
    pub state: ConsoleState,
    /// Configuration the console was launched with
    pub config: JarvisConfig,
    /// Webhook client used for deliveries
    client: WebhookClient,
    /// Signal to exit the application
    pub should_quit: bool,
}

impl App {
    /// Create a new application with its collaborators injected
    pub fn new(config: JarvisConfig, client: WebhookClient) -> Self {
        let state = ConsoleState::new(
            config.agents.clone(),
            config.console.max_log_entries,
            config.console.auto_scroll,
        );
        Self {
            state,
            config,
            client,
            should_quit: false,
        }
    }

    /// Append a system message to the log
    pub fn push_system(&mut self, text: impl Into<String>) {
        self.state.push_entry(LogKind::System, text);
    }

    /// Validate the current input and dispatch it to the selected agent
    ///
    /// At most one submission is in flight: while the lock is held this is
    /// a no-op. The send runs on the runtime so the console stays
    /// responsive; the spawned task always delivers exactly one outcome,
    /// and [`App::finish_submission`] releases the lock for success and
    /// failure alike.
    pub fn submit(&mut self, outcomes: mpsc::UnboundedSender<SubmitOutcome>) {
        if self.state.is_submitting {
            return;
        }

        let command = match validate_command(&self.state.input) {
            Ok(trimmed) => trimmed.to_string(),
            Err(e) => {
                self.state.push_entry(LogKind::Error, e.to_string());
                return;
            }
        };

        let Some(agent) = self.state.selected_agent() else {
            self.state
                .push_entry(LogKind::Error, "Please select an agent first.");
            return;
        };
        let agent_id = agent.id.clone();
        let agent_name = agent.name.clone();

        self.state.input.clear();
        self.state
            .push_entry(LogKind::Command, format!("[{}] {}", agent_name, command));
        self.state.is_submitting = true;

        let client = self.client.clone();
        tokio::spawn(async move {
            let outcome = match client.send_command(&agent_id, &command, Map::new()).await {
                Ok(response) => match response.text().await {
                    Ok(body) => SubmitOutcome::Success(body),
                    Err(e) => SubmitOutcome::Failure(ErrorInfo::from_error(
                        &JarvisError::Network(e.to_string()),
                    )),
                },
                Err(e) => SubmitOutcome::Failure(ErrorInfo::from_error(&e)),
            };
            // A send error just means the console exited mid-flight
            let _ = outcomes.send(outcome);
        });
    }

    /// Apply a completed submission: log the result and release the lock
    pub fn finish_submission(&mut self, outcome: SubmitOutcome) {
        self.state.is_submitting = false;
        match outcome {
            SubmitOutcome::Success(body) => {
                let text = if body.trim().is_empty() {
                    "Command accepted.".to_string()
                } else {
                    body
                };
                self.state.push_entry(LogKind::Response, text);
            }
            SubmitOutcome::Failure(info) => {
                tracing::error!("Webhook delivery failed: {}", info.message);
                self.state.push_entry(LogKind::Error, info.user_message);
            }
        }
    }

    /// Append a character to the input buffer
    pub fn push_input(&mut self, c: char) {
        self.state.input.push(c);
    }

    /// Remove the last character from the input buffer
    pub fn pop_input(&mut self) {
        self.state.input.pop();
    }
}
