//! # Gateway
//!
//! Platform-neutral inbound events, the outbound [`Session`] seam, the
//! listener table, and the serenity adapter that feeds them.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

pub mod event;
pub mod listeners;
pub mod discord;
pub mod session;

#[cfg(test)]
pub(crate) mod mock;

pub use event::{
    AutocompleteInteraction, ChatInputInteraction, CommandOption, EventKind, GuildInfo,
    InboundEvent, InboundMessage, OptionValue, ReadyInfo, ReplyTarget, UserRef,
};
pub use listeners::{Gateway, Listener};
pub use discord::{GatewayHandler, SerenitySession};
pub use session::{PublishedCommand, Session};
