//! # jarvis-core
//!
//! Core types for the Jarvis webhook console.
//!
//! Jarvis dispatches free-text commands to named agents through a single
//! webhook endpoint. This crate holds everything the client and console
//! share and keeps it free of I/O concerns:
//!
//! - The unified [`JarvisError`] type and display taxonomy ([`ErrorInfo`])
//! - The [`CommandEnvelope`] wire payload and [`Agent`] catalog entry
//! - The pure command validator ([`validate_command`])
//! - Configuration loading ([`JarvisConfig`])

mod config;
mod error;
mod types;
mod validate;

pub use config::{
    default_agents, ApiConfig, ConsoleConfig, JarvisConfig, DEFAULT_CONFIG_FILE,
};
pub use error::{ErrorInfo, ErrorKind, JarvisError, Result};
pub use types::{Agent, CommandEnvelope};
pub use validate::{validate_command, ValidationError, MAX_COMMAND_LEN};
