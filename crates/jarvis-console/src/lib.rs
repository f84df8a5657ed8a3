//! # jarvis-console
//!
//! Terminal console for dispatching agent commands over a webhook.
//!
//! The console renders the agent catalog, a scrolling activity log, and a
//! command input bar. Submissions are validated locally, dispatched through
//! the injected [`jarvis_client::WebhookClient`], and their outcomes appended
//! to the log; at most one submission is in flight at a time.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  JARVIS CONSOLE  http://n8n.loc/...   [Esc] quit [Tab] agent│
//! ├───────────────────────┬─────────────────────────────────────┤
//! │  AGENTS               │  LOG                                │
//! │  ▸ ✎ Code Writer      │  09:15:02  · Console initialized.   │
//! │      Generate code    │  09:15:23  ❯ [Code Writer] build it │
//! │    ⚡ Code Executor   │  09:15:24  ✓ Command accepted.      │
//! │      Execute code     │  09:16:01  ✗ Server error (502).    │
//! ├───────────────────────┴─────────────────────────────────────┤
//! │  ✎ Code Writer   ❯ deploy the new parser▌        sending…   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering is a pure projection of [`ConsoleState`]; the submission flow
//! never touches the display surface directly.

// Shared state types (contracts between the flow and the widgets)
mod state;

pub use state::{ConsoleState, LogEntry, LogKind};

// Widgets
mod widgets;

pub use widgets::{color_from_name, AgentListWidget, LogPanelWidget};

// Application and event loop
mod app;
mod event;
mod terminal;
mod ui;
mod run;

pub use app::{App, SubmitOutcome};
pub use event::{AppEvent, InputEdit};
pub use run::run;

// Unified error surface
pub use jarvis_core::{JarvisError, Result};
