use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Longest message accepted by the chat backend, in characters
pub const MAX_MESSAGE_CHARS: usize = 3000;

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// Role name expected by the backend
    pub fn role(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }
}

/// One message of the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
        }
    }
}

/// A new message together with everything said before it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<ChatMessage>,
    pub session_id: Option<String>,
}

/// Reject messages the backend would refuse anyway.
pub fn validate_message(text: &str) -> Result<()> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        bail!("message is required");
    }
    let chars = trimmed.chars().count();
    if chars > MAX_MESSAGE_CHARS {
        bail!("message is too long ({chars} characters, at most {MAX_MESSAGE_CHARS})");
    }
    if trimmed.contains('\0') {
        bail!("message contains null bytes");
    }
    if contains_script_tag(trimmed) {
        bail!("message contains potentially harmful script tags");
    }
    Ok(())
}

fn contains_script_tag(text: &str) -> bool {
    let lower = text.to_lowercase();
    match lower.find("<script") {
        Some(open) => lower[open..].contains("</script>"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_messages() {
        assert!(validate_message("Un T2 à Lyon sous 900€ ?").is_ok());
    }

    #[test]
    fn rejects_blank_messages() {
        let err = validate_message("   \n").unwrap_err();
        assert_eq!(err.to_string(), "message is required");
    }

    #[test]
    fn rejects_oversized_messages() {
        let long = "é".repeat(MAX_MESSAGE_CHARS + 1);
        assert!(validate_message(&long).is_err());
        assert!(validate_message(&"é".repeat(MAX_MESSAGE_CHARS)).is_ok());
    }

    #[test]
    fn rejects_null_bytes_and_script_tags() {
        assert!(validate_message("bonjour\0").is_err());
        assert!(validate_message("<SCRIPT>alert(1)</script>").is_err());
        assert!(validate_message("a <script> without closing").is_ok());
    }

    #[test]
    fn sender_roles() {
        assert_eq!(Sender::User.role(), "user");
        assert_eq!(Sender::Assistant.role(), "assistant");
    }
}
