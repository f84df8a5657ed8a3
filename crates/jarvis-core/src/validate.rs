//! Command validation
//!
//! Pure checks applied to raw input before a command gets anywhere near the
//! webhook client. Validation failures never reach the retry machinery.

use thiserror::Error;

/// Maximum accepted command length, in characters, after trimming
pub const MAX_COMMAND_LEN: usize = 1000;

/// Why a command was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Command cannot be empty")]
    Empty,

    #[error("Command is too long (max 1000 characters)")]
    TooLong { len: usize },
}

/// Validate raw command input, returning the trimmed command on success.
///
/// Deterministic and side-effect free. The returned slice is what a
/// [`crate::CommandEnvelope`] must be built from, so the envelope's
/// `command` field always holds the trimmed text.
pub fn validate_command(raw: &str) -> std::result::Result<&str, ValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let len = trimmed.chars().count();
    if len > MAX_COMMAND_LEN {
        return Err(ValidationError::TooLong { len });
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert_eq!(validate_command(""), Err(ValidationError::Empty));
        assert_eq!(validate_command("   "), Err(ValidationError::Empty));
        assert_eq!(validate_command("\t\n"), Err(ValidationError::Empty));

        // Rejections carry a non-empty message
        assert!(!ValidationError::Empty.to_string().is_empty());
    }

    #[test]
    fn test_accepts_and_trims() {
        assert_eq!(validate_command("deploy the app"), Ok("deploy the app"));
        assert_eq!(validate_command("  deploy the app  "), Ok("deploy the app"));
    }

    #[test]
    fn test_length_boundary() {
        let at_limit = "x".repeat(MAX_COMMAND_LEN);
        assert_eq!(validate_command(&at_limit), Ok(at_limit.as_str()));

        let over_limit = "x".repeat(MAX_COMMAND_LEN + 1);
        assert_eq!(
            validate_command(&over_limit),
            Err(ValidationError::TooLong {
                len: MAX_COMMAND_LEN + 1
            })
        );
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 1000 multi-byte characters trim to exactly the limit
        let command = "é".repeat(MAX_COMMAND_LEN);
        assert!(validate_command(&command).is_ok());
    }

    #[test]
    fn test_surrounding_whitespace_does_not_count() {
        let padded = format!("  {}  ", "x".repeat(MAX_COMMAND_LEN));
        assert!(validate_command(&padded).is_ok());
    }
}
