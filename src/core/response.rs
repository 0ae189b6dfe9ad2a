//! Outgoing reply types and Discord response limits
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.0.0: Reply and autocomplete choice types; drop embed chunking
//! - 1.0.0: Message truncation helpers

use serde::Serialize;

/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;
/// Discord rejects autocomplete responses with more choices than this
pub const MAX_AUTOCOMPLETE_CHOICES: usize = 25;

pub const COMMAND_NOT_FOUND: &str = "Command not found";
pub const GENERIC_FAILURE: &str =
    "❌ Sorry, I encountered an error processing your command. Please try again.";

/// A single outgoing reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    /// Visible only to the invoking user (interactions only)
    pub ephemeral: bool,
}

impl Reply {
    /// Plain reply visible to everyone in the channel
    pub fn new(content: impl Into<String>) -> Self {
        Reply {
            content: truncate_for_message(&content.into()),
            ephemeral: false,
        }
    }

    pub fn ephemeral(content: impl Into<String>) -> Self {
        Reply {
            ephemeral: true,
            ..Reply::new(content)
        }
    }
}

impl From<&str> for Reply {
    fn from(content: &str) -> Self {
        Reply::new(content)
    }
}

impl From<String> for Reply {
    fn from(content: String) -> Self {
        Reply::new(content)
    }
}

/// A suggested value returned to an autocomplete request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutocompleteChoice {
    pub name: String,
    pub value: serde_json::Value,
}

impl AutocompleteChoice {
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        AutocompleteChoice {
            name: name.into(),
            value: serde_json::Value::String(value.into()),
        }
    }

    pub fn integer(name: impl Into<String>, value: i64) -> Self {
        AutocompleteChoice {
            name: name.into(),
            value: serde_json::Value::from(value),
        }
    }
}

/// Truncate text to fit message limit, adding ellipsis if needed
pub fn truncate_for_message(text: &str) -> String {
    if text.len() <= MESSAGE_LIMIT {
        text.to_string()
    } else {
        // Find a safe UTF-8 boundary
        let mut end = MESSAGE_LIMIT - 3; // Room for "..."
        while !text.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}
