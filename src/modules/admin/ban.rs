//! Ban command
//!
//! Handles: /ban, !ban
//!
//! Acknowledges the request only; no moderation action is taken against
//! the platform.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::commands::handler::{PrefixCommandHandler, SlashCommandHandler};
use crate::commands::prefix::PrefixCommand;
use crate::commands::registry::Registry;
use crate::commands::slash::{OptionDescriptor, OptionKind, SlashCommand};
use crate::core::context::BotContext;
use crate::core::response::Reply;
use crate::gateway::event::{
    get_string_option, get_user_option, ChatInputInteraction, InboundMessage,
};
use crate::loader::Module;

const NO_REASON: &str = "No reason provided.";

pub struct BanModule;

impl Module for BanModule {
    fn name(&self) -> &str {
        "admin/ban"
    }

    fn register(&self, registry: &mut Registry) -> Result<()> {
        registry.register_slash_command(
            SlashCommand::new("ban", "Ban a user from the server.", SlashBan)
                .option(
                    OptionDescriptor::new("user", "The user to ban.", OptionKind::User)
                        .required(true),
                )
                .option(OptionDescriptor::new(
                    "reason",
                    "The reason for the ban.",
                    OptionKind::String,
                )),
        );
        registry.register_prefix_command(PrefixCommand::new("ban", PrefixBan));
        Ok(())
    }
}

/// Handler for /ban
pub struct SlashBan;

#[async_trait]
impl SlashCommandHandler for SlashBan {
    async fn execute(&self, ctx: &BotContext, interaction: &ChatInputInteraction) -> Result<()> {
        let Some(user) = get_user_option(&interaction.options, "user") else {
            return ctx
                .reply(interaction, Reply::ephemeral("User not found."))
                .await;
        };
        let reason = get_string_option(&interaction.options, "reason").unwrap_or(NO_REASON);

        info!(
            "[{}] Banning user {} ({}) for reason: {reason}",
            ctx.request_id(),
            user.tag,
            user.id
        );
        ctx.reply(
            interaction,
            Reply::ephemeral(format!("Banning user {} for reason: {reason}", user.tag)),
        )
        .await
    }
}

/// Handler for `!ban <user-id> [reason...]`
pub struct PrefixBan;

#[async_trait]
impl PrefixCommandHandler for PrefixBan {
    async fn execute(&self, ctx: &BotContext, message: &InboundMessage) -> Result<()> {
        let args = message.args();
        let Some((user_id, rest)) = args.split_first() else {
            return ctx.reply(message, "User ID not provided.").await;
        };
        let reason = if rest.is_empty() {
            NO_REASON.to_string()
        } else {
            rest.join(" ")
        };

        info!(
            "[{}] Banning user with ID {user_id} for reason: {reason}",
            ctx.request_id()
        );
        ctx.reply(
            message,
            format!("Banning user with ID {user_id} for reason: {reason}"),
        )
        .await
    }
}
