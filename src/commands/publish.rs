//! Command publication
//!
//! On the session's one-time ready signal, the registry's slash commands
//! are pushed to the configured guild as a single bulk overwrite.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::{error, info, warn};
use std::sync::Arc;

use super::registry::Registry;
use crate::core::context::BotContext;
use crate::core::error::BotError;
use crate::gateway::event::InboundEvent;
use crate::gateway::listeners::Listener;
use crate::gateway::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The platform acknowledged this many commands
    Published(usize),
    /// No slash commands registered; no network call made
    Skipped,
    TargetNotFound,
    Failed,
}

pub struct CommandPublisher {
    registry: Arc<Registry>,
    guild_id: u64,
}

impl CommandPublisher {
    pub fn new(registry: Arc<Registry>, guild_id: u64) -> Self {
        Self { registry, guild_id }
    }

    pub async fn publish(&self, session: &dyn Session) -> PublishOutcome {
        let Some(guild) = session.find_guild(self.guild_id).await else {
            error!("❌ {}", BotError::TargetNotFound(self.guild_id));
            return PublishOutcome::TargetNotFound;
        };

        let commands = self.registry.slash_descriptors();
        if commands.is_empty() {
            warn!(
                "⚠️ No slash commands registered, skipping publication to {} ({})",
                guild.name, guild.id
            );
            return PublishOutcome::Skipped;
        }

        info!(
            "🔧 Registering {} slash command(s) for guild {} ({})",
            commands.len(),
            guild.name,
            guild.id
        );
        match session.bulk_set_commands(guild.id, &commands).await {
            Ok(published) => {
                let count = published.len();
                info!(
                    "✅ └ {count} {} registered in {} ({}) guild successfully!",
                    if count == 1 { "command" } else { "commands" },
                    guild.name,
                    guild.id
                );
                PublishOutcome::Published(count)
            }
            Err(source) => {
                error!(
                    "❌ {}",
                    BotError::Publication {
                        guild_id: guild.id,
                        source,
                    }
                );
                PublishOutcome::Failed
            }
        }
    }
}

/// Installed once on `ready`
#[async_trait]
impl Listener for CommandPublisher {
    fn label(&self) -> String {
        format!("command-publisher (guild {})", self.guild_id)
    }

    async fn call(&self, ctx: &BotContext, event: &InboundEvent) -> Result<()> {
        if let InboundEvent::Ready(_) = event {
            self.publish(ctx.session()).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::handler::SlashCommandHandler;
    use crate::commands::slash::SlashCommand;
    use crate::gateway::event::ChatInputInteraction;
    use crate::gateway::mock::MockSession;

    struct Noop;

    #[async_trait]
    impl SlashCommandHandler for Noop {
        async fn execute(&self, _ctx: &BotContext, _i: &ChatInputInteraction) -> Result<()> {
            Ok(())
        }
    }

    fn registry_with(names: &[&str]) -> Arc<Registry> {
        let mut registry = Registry::new();
        for name in names {
            registry.register_slash_command(SlashCommand::new(*name, "test", Noop));
        }
        Arc::new(registry)
    }

    #[tokio::test]
    async fn test_publish_sends_every_command_in_one_call() {
        let session = MockSession::new();
        let publisher = CommandPublisher::new(registry_with(&["ping", "ban"]), MockSession::GUILD_ID);

        assert_eq!(publisher.publish(&session).await, PublishOutcome::Published(2));
        assert_eq!(
            session.publish_calls(),
            vec![(
                MockSession::GUILD_ID,
                vec!["ping".to_string(), "ban".to_string()]
            )]
        );
    }

    #[tokio::test]
    async fn test_publish_with_no_commands_makes_no_call() {
        let session = MockSession::new();
        let publisher = CommandPublisher::new(registry_with(&[]), MockSession::GUILD_ID);

        assert_eq!(publisher.publish(&session).await, PublishOutcome::Skipped);
        assert!(session.publish_calls().is_empty());
    }

    #[tokio::test]
    async fn test_publish_aborts_when_guild_missing() {
        let session = MockSession::without_guild();
        let publisher = CommandPublisher::new(registry_with(&["ping"]), MockSession::GUILD_ID);

        assert_eq!(publisher.publish(&session).await, PublishOutcome::TargetNotFound);
        assert!(session.publish_calls().is_empty());
    }

    #[tokio::test]
    async fn test_publish_failure_is_not_retried() {
        let session = MockSession::failing_publish();
        let publisher = CommandPublisher::new(registry_with(&["ping"]), MockSession::GUILD_ID);

        assert_eq!(publisher.publish(&session).await, PublishOutcome::Failed);
        assert_eq!(session.publish_calls().len(), 1);
    }
}
