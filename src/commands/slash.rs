//! # Slash Commands (/)
//!
//! Slash command entries and the descriptors published to Discord.
//!
//! - **Version**: 3.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 3.0.0: Entries pair a descriptor with their handler
//! - 2.0.0: Option descriptors with autocomplete flag
//! - 1.0.0: Initial command definitions

use std::fmt;
use std::sync::Arc;

use super::handler::SlashCommandHandler;
use super::registry::Named;

/// Invocation kind of an application command. Only chat-input is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandKind {
    #[default]
    ChatInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Integer,
    Boolean,
    User,
    Channel,
    Role,
    Mentionable,
    Number,
    Attachment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub name: String,
    pub description: String,
    pub kind: OptionKind,
    pub required: bool,
    pub autocomplete: bool,
}

impl OptionDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: OptionKind) -> Self {
        OptionDescriptor {
            name: name.into(),
            description: description.into(),
            kind,
            required: false,
            autocomplete: false,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn autocomplete(mut self, autocomplete: bool) -> Self {
        self.autocomplete = autocomplete;
        self
    }
}

/// The declarative half of a slash command, as published to the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
    pub kind: CommandKind,
    pub options: Vec<OptionDescriptor>,
    pub dm_permission: bool,
}

/// A registered slash command
#[derive(Clone)]
pub struct SlashCommand {
    pub data: CommandDescriptor,
    pub handler: Arc<dyn SlashCommandHandler>,
}

impl SlashCommand {
    /// New chat-input command, not usable in DMs, with no options
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: impl SlashCommandHandler + 'static,
    ) -> Self {
        SlashCommand {
            data: CommandDescriptor {
                name: name.into(),
                description: description.into(),
                kind: CommandKind::default(),
                options: Vec::new(),
                dm_permission: false,
            },
            handler: Arc::new(handler),
        }
    }

    pub fn option(mut self, option: OptionDescriptor) -> Self {
        self.data.options.push(option);
        self
    }

    pub fn dm_permission(mut self, allowed: bool) -> Self {
        self.data.dm_permission = allowed;
        self
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }
}

impl Named for SlashCommand {
    fn name(&self) -> &str {
        &self.data.name
    }
}

impl fmt::Debug for SlashCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlashCommand")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
