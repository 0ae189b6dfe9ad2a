//! # Prefix Commands
//!
//! Text commands recognised by a leading trigger in a chat message.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use std::fmt;
use std::sync::Arc;

use super::handler::PrefixCommandHandler;
use super::registry::Named;
use crate::gateway::event::InboundMessage;

/// A registered prefix command
#[derive(Clone)]
pub struct PrefixCommand {
    pub name: String,
    pub handler: Arc<dyn PrefixCommandHandler>,
}

impl PrefixCommand {
    pub fn new(name: impl Into<String>, handler: impl PrefixCommandHandler + 'static) -> Self {
        PrefixCommand {
            name: name.into(),
            handler: Arc::new(handler),
        }
    }
}

impl Named for PrefixCommand {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for PrefixCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixCommand")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Command name carried by `content`, if it starts with `prefix`
///
/// The name is the first whitespace-delimited token with the prefix
/// stripped. A bare prefix carries no name.
pub fn prefix_command_name<'a>(content: &'a str, prefix: &str) -> Option<&'a str> {
    let first = content.split_whitespace().next()?;
    first
        .strip_prefix(prefix)
        .filter(|name| !name.is_empty())
}

/// Whether a message should be routed to the prefix commands
///
/// Bot authors (the bot itself included) never trigger commands.
pub fn is_prefix_command(message: &InboundMessage, prefix: &str) -> bool {
    !message.author.bot && prefix_command_name(&message.content, prefix).is_some()
}
