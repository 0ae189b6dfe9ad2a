//! Ping command
//!
//! Handles: /ping, !ping

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::commands::handler::{PrefixCommandHandler, SlashCommandHandler};
use crate::commands::prefix::PrefixCommand;
use crate::commands::registry::Registry;
use crate::commands::slash::SlashCommand;
use crate::core::context::BotContext;
use crate::gateway::event::{ChatInputInteraction, InboundMessage};
use crate::loader::Module;

pub struct PingModule;

impl Module for PingModule {
    fn name(&self) -> &str {
        "utility/ping"
    }

    fn register(&self, registry: &mut Registry) -> Result<()> {
        registry.register_slash_command(
            SlashCommand::new("ping", "Test bot responsiveness", Ping).dm_permission(true),
        );
        registry.register_prefix_command(PrefixCommand::new("ping", Ping));
        Ok(())
    }
}

pub struct Ping;

#[async_trait]
impl SlashCommandHandler for Ping {
    async fn execute(&self, ctx: &BotContext, interaction: &ChatInputInteraction) -> Result<()> {
        ctx.reply(interaction, "Pong!").await?;
        info!(
            "[{}] Ping command completed for user {}",
            ctx.request_id(),
            interaction.user.id
        );
        Ok(())
    }
}

#[async_trait]
impl PrefixCommandHandler for Ping {
    async fn execute(&self, ctx: &BotContext, message: &InboundMessage) -> Result<()> {
        ctx.reply(message, "pong").await
    }
}
