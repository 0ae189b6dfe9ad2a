//! Lifecycle event handlers
//!
//! - `message-logger` (recurring, messageCreate)
//! - `ready-greeting` (once, ready)
//! - `guild-logger` (recurring, guildCreate)

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::commands::registry::Registry;
use crate::core::context::BotContext;
use crate::events::handler::{EventEntry, EventHandler};
use crate::gateway::event::{EventKind, InboundEvent};
use crate::loader::Module;

pub struct LifecycleModule;

impl Module for LifecycleModule {
    fn name(&self) -> &str {
        "events/lifecycle"
    }

    fn register(&self, registry: &mut Registry) -> Result<()> {
        registry.register_event(EventEntry::on(
            "message-logger",
            EventKind::MessageCreate,
            MessageLogger,
        ));
        registry.register_event(EventEntry::once(
            "ready-greeting",
            EventKind::Ready,
            ReadyGreeting,
        ));
        registry.register_event(EventEntry::on(
            "guild-logger",
            EventKind::GuildCreate,
            GuildLogger,
        ));
        Ok(())
    }
}

pub struct MessageLogger;

#[async_trait]
impl EventHandler for MessageLogger {
    async fn execute(&self, ctx: &BotContext, event: &InboundEvent) -> Result<()> {
        if let InboundEvent::Message(message) = event {
            info!(
                "[{}] 💬 Message from {} in channel {}: {}",
                ctx.request_id(),
                message.author.name,
                message.channel_id,
                message.content
            );
        }
        Ok(())
    }
}

pub struct ReadyGreeting;

#[async_trait]
impl EventHandler for ReadyGreeting {
    async fn execute(&self, _ctx: &BotContext, event: &InboundEvent) -> Result<()> {
        if let InboundEvent::Ready(ready) = event {
            info!("👋 Client is ready! Logged in as {}", ready.user.tag);
        }
        Ok(())
    }
}

pub struct GuildLogger;

#[async_trait]
impl EventHandler for GuildLogger {
    async fn execute(&self, _ctx: &BotContext, event: &InboundEvent) -> Result<()> {
        if let InboundEvent::GuildCreate { guild, is_new } = event {
            let members = guild
                .member_count
                .map(|count| count.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            if *is_new {
                info!("🏠 Joined new guild: {} ({}) | Members: {members}", guild.name, guild.id);
            } else {
                info!("🏠 Guild available: {} ({}) | Members: {members}", guild.name, guild.id);
            }
        }
        Ok(())
    }
}
