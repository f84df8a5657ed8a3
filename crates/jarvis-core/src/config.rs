//! Configuration management for Jarvis
//!
//! This module provides configuration structures for the console, including
//! webhook endpoint settings, retry parameters, console display limits, and
//! the agent catalog.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::Agent;
use crate::{JarvisError, Result};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "jarvis.toml";

/// Top-level Jarvis configuration
///
/// Loaded from `jarvis.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JarvisConfig {
    /// Webhook endpoint and delivery settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Console display settings
    #[serde(default)]
    pub console: ConsoleConfig,

    /// Agent catalog
    #[serde(default = "default_agents")]
    pub agents: Vec<Agent>,
}

/// Webhook endpoint and delivery settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the webhook host
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path appended to the base URL
    #[serde(default = "default_webhook_path")]
    pub webhook_path: String,

    /// Per-attempt deadline in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Total delivery attempts before giving up
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,

    /// Base inter-attempt delay in milliseconds; grows linearly with the
    /// attempt number
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl ApiConfig {
    /// Full webhook URL
    pub fn webhook_url(&self) -> String {
        format!("{}{}", self.base_url, self.webhook_path)
    }
}

/// Console display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Maximum log entries kept; oldest are dropped first
    #[serde(default = "default_max_log_entries")]
    pub max_log_entries: usize,

    /// Pin the log view to the newest entry on append
    #[serde(default = "default_auto_scroll")]
    pub auto_scroll: bool,

    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

// Default value providers
fn default_base_url() -> String {
    "http://n8n.loc".to_string()
}

fn default_webhook_path() -> String {
    "/webhook/jarvis/command".to_string()
}

fn default_timeout_ms() -> u64 {
    30000
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_max_log_entries() -> usize {
    100
}

fn default_auto_scroll() -> bool {
    true
}

fn default_tick_ms() -> u64 {
    100
}

/// Built-in agent catalog used when the config file defines none
pub fn default_agents() -> Vec<Agent> {
    vec![
        Agent {
            id: "code-writer".to_string(),
            name: "Code Writer".to_string(),
            description: "Generate and write code".to_string(),
            icon: "✎".to_string(),
            color: "green".to_string(),
            enabled: true,
        },
        Agent {
            id: "code-executor".to_string(),
            name: "Code Executor".to_string(),
            description: "Execute and run code".to_string(),
            icon: "⚡".to_string(),
            color: "blue".to_string(),
            enabled: true,
        },
        Agent {
            id: "ticket-maker".to_string(),
            name: "Ticket Maker".to_string(),
            description: "Create tickets automatically".to_string(),
            icon: "⚑".to_string(),
            color: "yellow".to_string(),
            enabled: true,
        },
        Agent {
            id: "prompt-hub".to_string(),
            name: "Prompt Hub".to_string(),
            description: "Find appropriate prompts for your needs".to_string(),
            icon: "⌕".to_string(),
            color: "magenta".to_string(),
            enabled: true,
        },
    ]
}

impl JarvisConfig {
    /// Load configuration from the given path, or use defaults if absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::debug!("Loading configuration from {}", path.display());
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| {
                JarvisError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })
        } else {
            tracing::debug!(
                "No configuration at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Write the default configuration to the given path
    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let config = Self::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| JarvisError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Look up an agent by id, requiring it to be enabled
    pub fn enabled_agent(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.enabled && a.id == id)
    }
}

impl Default for JarvisConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            console: ConsoleConfig::default(),
            agents: default_agents(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            webhook_path: default_webhook_path(),
            timeout_ms: default_timeout_ms(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            max_log_entries: default_max_log_entries(),
            auto_scroll: default_auto_scroll(),
            tick_ms: default_tick_ms(),
        }
    }
}
