//! Command handler traits
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.0.0: Split into slash and prefix handlers, add autocomplete hook
//! - 1.0.0: Initial implementation for modular command handling

use anyhow::Result;
use async_trait::async_trait;

use crate::core::context::BotContext;
use crate::core::response::AutocompleteChoice;
use crate::gateway::event::{AutocompleteInteraction, ChatInputInteraction, InboundMessage};

/// Trait for slash command handlers
///
/// The handler owns all user-visible output on success. Returning an error
/// makes the dispatcher log it and send a generic failure reply.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl SlashCommandHandler for PingHandler {
///     async fn execute(&self, ctx: &BotContext, interaction: &ChatInputInteraction) -> Result<()> {
///         ctx.reply(interaction, "Pong!").await
///     }
/// }
/// ```
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    async fn execute(&self, ctx: &BotContext, interaction: &ChatInputInteraction) -> Result<()>;

    /// Suggest values for the option being typed
    ///
    /// `None` sends nothing back. The default declares no autocomplete.
    async fn autocomplete(
        &self,
        _ctx: &BotContext,
        _interaction: &AutocompleteInteraction,
    ) -> Result<Option<Vec<AutocompleteChoice>>> {
        Ok(None)
    }
}

/// Trait for prefix (text) command handlers
#[async_trait]
pub trait PrefixCommandHandler: Send + Sync {
    async fn execute(&self, ctx: &BotContext, message: &InboundMessage) -> Result<()>;
}
