//! Inbound platform events
//!
//! Platform-neutral shapes for everything the session delivers. The serenity
//! adapter converts into these; handlers and tests only ever see these.

use std::fmt;

use crate::core::response::Reply;

/// Identifier of a platform event that listeners can attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Ready,
    MessageCreate,
    InteractionCreate,
    GuildCreate,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Ready => "ready",
            EventKind::MessageCreate => "messageCreate",
            EventKind::InteractionCreate => "interactionCreate",
            EventKind::GuildCreate => "guildCreate",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: u64,
    pub name: String,
    /// `name#discriminator`
    pub tag: String,
    pub bot: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildInfo {
    pub id: u64,
    pub name: String,
    pub member_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    Number(f64),
    User(UserRef),
    Channel(u64),
    Role(u64),
    Mentionable(u64),
    /// Attachment URL
    Attachment(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandOption {
    pub name: String,
    pub value: OptionValue,
}

/// Handle for answering an interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRef {
    pub id: u64,
    pub token: String,
}

/// Handle for replying to a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRef {
    pub channel_id: u64,
    pub message_id: u64,
}

/// Where a reply goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyTarget {
    Interaction(InteractionRef),
    Message(MessageRef),
}

/// A chat-input (slash) command invocation
#[derive(Debug, Clone, PartialEq)]
pub struct ChatInputInteraction {
    pub interaction: InteractionRef,
    pub name: String,
    pub options: Vec<CommandOption>,
    pub user: UserRef,
    pub guild_id: Option<u64>,
    pub channel_id: u64,
}

/// The option a user is currently typing into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusedOption {
    pub name: String,
    pub value: String,
}

/// A request for suggested option values
#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteInteraction {
    pub interaction: InteractionRef,
    pub name: String,
    pub options: Vec<CommandOption>,
    pub focused: Option<FocusedOption>,
    pub user: UserRef,
    pub guild_id: Option<u64>,
}

/// A plain chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub id: u64,
    pub channel_id: u64,
    pub guild_id: Option<u64>,
    pub author: UserRef,
    pub content: String,
}

impl InboundMessage {
    pub fn message_ref(&self) -> MessageRef {
        MessageRef {
            channel_id: self.channel_id,
            message_id: self.id,
        }
    }

    /// Whitespace-delimited tokens after the first one
    pub fn args(&self) -> Vec<&str> {
        self.content.split_whitespace().skip(1).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyInfo {
    pub user: UserRef,
    pub guild_count: usize,
    pub session_id: String,
}

/// Everything the session can deliver
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    ChatInput(ChatInputInteraction),
    Autocomplete(AutocompleteInteraction),
    Message(InboundMessage),
    Ready(ReadyInfo),
    GuildCreate { guild: GuildInfo, is_new: bool },
}

impl InboundEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            InboundEvent::ChatInput(_) | InboundEvent::Autocomplete(_) => {
                EventKind::InteractionCreate
            }
            InboundEvent::Message(_) => EventKind::MessageCreate,
            InboundEvent::Ready(_) => EventKind::Ready,
            InboundEvent::GuildCreate { .. } => EventKind::GuildCreate,
        }
    }
}

impl From<&ChatInputInteraction> for ReplyTarget {
    fn from(interaction: &ChatInputInteraction) -> Self {
        ReplyTarget::Interaction(interaction.interaction.clone())
    }
}

impl From<&InboundMessage> for ReplyTarget {
    fn from(message: &InboundMessage) -> Self {
        ReplyTarget::Message(message.message_ref())
    }
}

/// Find an option by name
pub fn find_option<'a>(options: &'a [CommandOption], name: &str) -> Option<&'a OptionValue> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .map(|opt| &opt.value)
}

/// Utility function to get string option from slash command
pub fn get_string_option<'a>(options: &'a [CommandOption], name: &str) -> Option<&'a str> {
    match find_option(options, name)? {
        OptionValue::String(s) => Some(s.as_str()),
        _ => None,
    }
}

/// Utility function to get integer option from slash command
pub fn get_integer_option(options: &[CommandOption], name: &str) -> Option<i64> {
    match find_option(options, name)? {
        OptionValue::Integer(i) => Some(*i),
        _ => None,
    }
}

/// Utility function to get boolean option from slash command
pub fn get_bool_option(options: &[CommandOption], name: &str) -> Option<bool> {
    match find_option(options, name)? {
        OptionValue::Boolean(b) => Some(*b),
        _ => None,
    }
}

/// Utility function to get user option from slash command
pub fn get_user_option<'a>(options: &'a [CommandOption], name: &str) -> Option<&'a UserRef> {
    match find_option(options, name)? {
        OptionValue::User(user) => Some(user),
        _ => None,
    }
}

/// Utility function to get channel option from slash command
pub fn get_channel_option(options: &[CommandOption], name: &str) -> Option<u64> {
    match find_option(options, name)? {
        OptionValue::Channel(id) => Some(*id),
        _ => None,
    }
}

/// Utility function to get role option from slash command
pub fn get_role_option(options: &[CommandOption], name: &str) -> Option<u64> {
    match find_option(options, name)? {
        OptionValue::Role(id) => Some(*id),
        _ => None,
    }
}

/// Pair a target with a reply, for sessions that log what they send
pub fn describe_reply(target: &ReplyTarget, reply: &Reply) -> String {
    let visibility = if reply.ephemeral { "ephemeral" } else { "public" };
    match target {
        ReplyTarget::Interaction(i) => format!("{visibility} reply to interaction {}", i.id),
        ReplyTarget::Message(m) => format!(
            "{visibility} reply to message {} in channel {}",
            m.message_id, m.channel_id
        ),
    }
}
