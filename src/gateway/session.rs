//! Outbound side of the platform connection

use anyhow::Result;
use async_trait::async_trait;

use super::event::{GuildInfo, InteractionRef, ReplyTarget};
use crate::commands::slash::CommandDescriptor;
use crate::core::response::{AutocompleteChoice, Reply};

/// A command as acknowledged by the platform after publication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedCommand {
    pub id: u64,
    pub name: String,
}

/// Operations the framework needs from a connected session
///
/// Every call is attempted exactly once; callers log failures and move on.
#[async_trait]
pub trait Session: Send + Sync {
    /// Send a reply to an interaction or a message
    async fn send_reply(&self, target: &ReplyTarget, reply: Reply) -> Result<()>;

    /// Answer an autocomplete request with the given choices
    async fn send_autocomplete(
        &self,
        interaction: &InteractionRef,
        choices: &[AutocompleteChoice],
    ) -> Result<()>;

    /// Look up a guild the bot can see
    async fn find_guild(&self, guild_id: u64) -> Option<GuildInfo>;

    /// Replace every command in a guild with the given set
    async fn bulk_set_commands(
        &self,
        guild_id: u64,
        commands: &[CommandDescriptor],
    ) -> Result<Vec<PublishedCommand>>;
}
