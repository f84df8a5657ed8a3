//! # jarvis-client
//!
//! Retrying webhook delivery client for the Jarvis console.
//!
//! One [`WebhookClient::send_command`] call validates the command, wraps it
//! in a [`jarvis_core::CommandEnvelope`], and POSTs it to the configured
//! webhook. Each attempt races against a deadline; transient failures
//! (timeout, network, non-2xx status) are retried with a linearly growing
//! delay up to the configured attempt budget, after which the last error
//! propagates unchanged.

mod client;

pub use client::WebhookClient;

// Re-export the unified error surface so callers need only this crate
pub use jarvis_core::{ErrorInfo, ErrorKind, JarvisError, Result};
