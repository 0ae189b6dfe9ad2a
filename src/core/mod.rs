//! # Core Module
//!
//! Configuration, errors, reply types and the per-event handler context.
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.0.0: Add error kinds and session-backed context
//! - 1.0.0: Initial creation with config and response modules

pub mod config;
pub mod context;
pub mod error;
pub mod response;

pub use config::Config;
pub use context::BotContext;
pub use error::BotError;
pub use response::{
    truncate_for_message, AutocompleteChoice, Reply, COMMAND_NOT_FOUND, GENERIC_FAILURE,
    MAX_AUTOCOMPLETE_CHOICES, MESSAGE_LIMIT,
};
