//! Domain types for the Jarvis console

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A selectable command target
///
/// Agents are static catalog entries loaded from configuration; nothing
/// mutates them at runtime. The console's transient "selected" marker lives
/// in the UI layer, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Stable identifier sent in the envelope's `agent` field
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Short description shown in the agent list
    pub description: String,
    /// Single glyph shown next to the name
    pub icon: String,
    /// Color name for console styling
    pub color: String,
    /// Disabled agents are never selectable
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// JSON payload delivered to the webhook
///
/// Constructed fresh per send from a command that already passed validation,
/// so `command` always holds the trimmed text. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEnvelope {
    /// Target agent id
    pub agent: String,
    /// Trimmed command text
    pub command: String,
    /// Additional context, defaults to an empty object
    #[serde(default)]
    pub context: Map<String, Value>,
    /// Build time, serialized as RFC 3339
    pub timestamp: DateTime<Utc>,
}

impl CommandEnvelope {
    /// Build a fresh envelope, stamping the current time
    pub fn new(
        agent: impl Into<String>,
        command: impl Into<String>,
        context: Map<String, Value>,
    ) -> Self {
        Self {
            agent: agent.into(),
            command: command.into(),
            context,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_json_round_trip() {
        let mut context = Map::new();
        context.insert("source".to_string(), json!("console"));
        context.insert("attempt".to_string(), json!(1));

        let envelope = CommandEnvelope::new("code-writer", "write a parser", context);

        let encoded = serde_json::to_string(&envelope).unwrap();
        let decoded: CommandEnvelope = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, envelope);
    }

    #[test]
    fn test_envelope_wire_fields() {
        let envelope = CommandEnvelope::new("ticket-maker", "open a ticket", Map::new());
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["agent"], "ticket-maker");
        assert_eq!(value["command"], "open a ticket");
        assert!(value["context"].as_object().unwrap().is_empty());

        // Timestamp serializes as an ISO-8601 string
        let timestamp = value["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[test]
    fn test_envelope_decodes_without_context() {
        let raw = r#"{"agent":"code-executor","command":"run tests","timestamp":"2025-06-01T12:00:00Z"}"#;
        let envelope: CommandEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.agent, "code-executor");
        assert!(envelope.context.is_empty());
    }

    #[test]
    fn test_agent_enabled_defaults_to_true() {
        let raw = r#"{"id":"a1","name":"A1","description":"","icon":"·","color":"green"}"#;
        let agent: Agent = serde_json::from_str(raw).unwrap();
        assert!(agent.enabled);
    }
}
