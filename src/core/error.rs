//! Framework error kinds
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial error kinds for dispatch, publication, loading and config

use thiserror::Error;

/// Errors raised at the framework's boundaries.
///
/// None of these are fatal once the session is running. They are built at
/// the point of failure, logged, and dropped.
#[derive(Debug, Error)]
pub enum BotError {
    /// No command is registered under the invoked name
    #[error("command not found: {0}")]
    CommandNotFound(String),

    /// A command or event handler returned an error
    #[error("handler '{name}' failed: {source}")]
    HandlerExecution {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// The configured guild is not visible to the bot
    #[error("guild {0} not found")]
    TargetNotFound(u64),

    /// The platform rejected the bulk command overwrite
    #[error("failed to publish commands to guild {guild_id}: {source}")]
    Publication {
        guild_id: u64,
        #[source]
        source: anyhow::Error,
    },

    /// A handler-definition module failed during registration
    #[error("failed to load module '{module}': {source}")]
    ModuleLoad {
        module: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("invalid environment variables: {}", .0.join("; "))]
    InvalidEnvironment(Vec<String>),
}

impl BotError {
    pub fn handler(name: impl Into<String>, source: anyhow::Error) -> Self {
        BotError::HandlerExecution {
            name: name.into(),
            source,
        }
    }
}
