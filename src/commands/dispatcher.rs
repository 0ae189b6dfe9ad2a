//! Command dispatch
//!
//! Routes slash invocations, autocomplete requests and prefix messages to
//! their registered handlers. Handler failures stop here: they are logged
//! and turned into a single generic reply.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, error, info, warn};
use std::sync::Arc;

use super::prefix::{is_prefix_command, prefix_command_name};
use super::registry::Registry;
use crate::core::context::BotContext;
use crate::core::error::BotError;
use crate::core::response::{Reply, COMMAND_NOT_FOUND, GENERIC_FAILURE, MAX_AUTOCOMPLETE_CHOICES};
use crate::gateway::event::{
    AutocompleteInteraction, ChatInputInteraction, InboundEvent, InboundMessage, ReplyTarget,
};
use crate::gateway::listeners::Listener;

/// What happened to one inbound invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Handler ran and succeeded
    Executed,
    /// No entry under that name; a not-found reply was sent
    NotFound,
    /// Handler failed; a generic failure reply was sent
    Failed,
    /// Autocomplete answered with this many choices
    Suggested(usize),
    /// Nothing to answer (no autocomplete, or a callback failure)
    NoResponse,
    /// Not a command at all
    Ignored,
}

pub struct CommandDispatcher {
    registry: Arc<Registry>,
    prefix: String,
}

impl CommandDispatcher {
    pub fn new(registry: Arc<Registry>, prefix: impl Into<String>) -> Self {
        Self {
            registry,
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub async fn dispatch_slash(
        &self,
        ctx: &BotContext,
        interaction: &ChatInputInteraction,
    ) -> DispatchOutcome {
        let request_id = ctx.request_id();
        let name = interaction.name.as_str();
        info!(
            "[{request_id}] 📥 Slash command received | Command: {name} | User: {} | Guild: {}",
            interaction.user.id,
            interaction
                .guild_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "DM".to_string())
        );

        let Some(command) = self.registry.slash_command(name) else {
            warn!("[{request_id}] ❓ {}", BotError::CommandNotFound(name.to_string()));
            self.send(ctx, interaction.into(), Reply::ephemeral(COMMAND_NOT_FOUND))
                .await;
            return DispatchOutcome::NotFound;
        };

        match command.handler.execute(ctx, interaction).await {
            Ok(()) => {
                debug!("[{request_id}] ✅ Slash command /{name} completed");
                DispatchOutcome::Executed
            }
            Err(e) => {
                error!(
                    "[{request_id}] ❌ Error handling slash command: {}",
                    BotError::handler(format!("/{name}"), e)
                );
                self.send(ctx, interaction.into(), Reply::ephemeral(GENERIC_FAILURE))
                    .await;
                DispatchOutcome::Failed
            }
        }
    }

    pub async fn dispatch_prefix(
        &self,
        ctx: &BotContext,
        message: &InboundMessage,
    ) -> DispatchOutcome {
        if !is_prefix_command(message, &self.prefix) {
            return DispatchOutcome::Ignored;
        }
        let Some(name) = prefix_command_name(&message.content, &self.prefix) else {
            return DispatchOutcome::Ignored;
        };

        let request_id = ctx.request_id();
        info!(
            "[{request_id}] 🎯 Processing prefix command: {name} | Args: {} | User: {}",
            message.args().len(),
            message.author.id
        );

        let Some(command) = self.registry.prefix_command(name) else {
            warn!("[{request_id}] ❓ {}", BotError::CommandNotFound(name.to_string()));
            self.send(ctx, message.into(), Reply::new(COMMAND_NOT_FOUND))
                .await;
            return DispatchOutcome::NotFound;
        };

        match command.handler.execute(ctx, message).await {
            Ok(()) => {
                debug!("[{request_id}] ✅ Prefix command {name} completed");
                DispatchOutcome::Executed
            }
            Err(e) => {
                error!(
                    "[{request_id}] ❌ Error handling prefix command: {}",
                    BotError::handler(format!("{}{name}", self.prefix), e)
                );
                self.send(ctx, message.into(), Reply::new(GENERIC_FAILURE))
                    .await;
                DispatchOutcome::Failed
            }
        }
    }

    pub async fn dispatch_autocomplete(
        &self,
        ctx: &BotContext,
        interaction: &AutocompleteInteraction,
    ) -> DispatchOutcome {
        let request_id = ctx.request_id();
        let name = interaction.name.as_str();

        let Some(command) = self.registry.slash_command(name) else {
            warn!("[{request_id}] ❓ Autocomplete for unknown command /{name}");
            return DispatchOutcome::NoResponse;
        };

        let mut choices = match command.handler.autocomplete(ctx, interaction).await {
            Ok(Some(choices)) => choices,
            Ok(None) => {
                debug!("[{request_id}] /{name} offers no autocomplete");
                return DispatchOutcome::NoResponse;
            }
            Err(e) => {
                error!(
                    "[{request_id}] ❌ Error handling autocomplete: {}",
                    BotError::handler(format!("/{name}"), e)
                );
                return DispatchOutcome::NoResponse;
            }
        };

        choices.truncate(MAX_AUTOCOMPLETE_CHOICES);
        let count = choices.len();
        if let Err(e) = ctx
            .session()
            .send_autocomplete(&interaction.interaction, &choices)
            .await
        {
            error!("[{request_id}] Failed to send autocomplete for /{name}: {e:#}");
        }
        DispatchOutcome::Suggested(count)
    }

    async fn send(&self, ctx: &BotContext, target: ReplyTarget, reply: Reply) {
        if let Err(why) = ctx.session().send_reply(&target, reply).await {
            error!("[{}] Failed to send reply: {why:#}", ctx.request_id());
        }
    }
}

/// Installed on `interactionCreate` and `messageCreate`
#[async_trait]
impl Listener for CommandDispatcher {
    fn label(&self) -> String {
        "command-dispatcher".to_string()
    }

    async fn call(&self, ctx: &BotContext, event: &InboundEvent) -> Result<()> {
        match event {
            InboundEvent::ChatInput(interaction) => {
                self.dispatch_slash(ctx, interaction).await;
            }
            InboundEvent::Autocomplete(interaction) => {
                self.dispatch_autocomplete(ctx, interaction).await;
            }
            InboundEvent::Message(message) => {
                self.dispatch_prefix(ctx, message).await;
            }
            InboundEvent::Ready(_) | InboundEvent::GuildCreate { .. } => {}
        }
        Ok(())
    }
}
