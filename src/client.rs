//! # Framework wiring
//!
//! Owns the frozen registry and the gateway listener table, and connects
//! them to a serenity client.
//!
//! Listener installation order per event identifier:
//! 1. command dispatcher on `interactionCreate` and `messageCreate`
//! 2. command publisher, once, on `ready`
//! 3. one aggregate listener per event-handler group
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! ### 1.0.0
//! - Initial release with bootstrap and per-event context minting

use anyhow::Result;
use log::{error, info, warn};
use serenity::prelude::{Client, GatewayIntents};
use std::sync::Arc;

use crate::commands::dispatcher::CommandDispatcher;
use crate::commands::publish::CommandPublisher;
use crate::commands::registry::Registry;
use crate::core::config::Config;
use crate::core::context::BotContext;
use crate::events::dispatcher::install_event_handlers;
use crate::gateway::event::{EventKind, InboundEvent};
use crate::gateway::listeners::Gateway;
use crate::gateway::discord::GatewayHandler;
use crate::gateway::session::Session;
use crate::loader::{load_modules, Module};

/// Options for [`bootstrap`]
#[derive(Debug, Clone, Copy)]
pub struct BootstrapOptions {
    pub intents: GatewayIntents,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            intents: GatewayIntents::GUILDS
                | GatewayIntents::GUILD_MESSAGES
                | GatewayIntents::MESSAGE_CONTENT,
        }
    }
}

/// Registry plus the listeners built from it
pub struct Framework {
    registry: Arc<Registry>,
    gateway: Gateway,
}

impl Framework {
    /// Freeze the registry and install every listener
    pub fn new(registry: Registry, config: &Config) -> Self {
        let registry = Arc::new(registry);
        let mut gateway = Gateway::new();

        let dispatcher = Arc::new(CommandDispatcher::new(
            Arc::clone(&registry),
            config.command_prefix.clone(),
        ));
        gateway.on(EventKind::InteractionCreate, dispatcher.clone());
        gateway.on(EventKind::MessageCreate, dispatcher);

        gateway.once(
            EventKind::Ready,
            Arc::new(CommandPublisher::new(
                Arc::clone(&registry),
                config.discord_guild_id,
            )),
        );

        let groups = install_event_handlers(&registry, &mut gateway);
        info!(
            "🧩 Framework ready: {} slash, {} prefix, {} event group(s)",
            registry.slash_commands().len(),
            registry.prefix_commands().len(),
            groups
        );

        Self { registry, gateway }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Mint a context for one inbound event and deliver it
    ///
    /// Returns the number of listeners that ran.
    pub async fn handle(&self, session: Arc<dyn Session>, event: InboundEvent) -> usize {
        let ctx = BotContext::new(session);
        self.gateway.emit(&ctx, &event).await
    }
}

/// Load modules, wire the framework, and run the client until it stops
pub async fn bootstrap(
    config: Config,
    modules: Vec<Box<dyn Module>>,
    options: BootstrapOptions,
) -> Result<()> {
    let mut registry = Registry::new();
    let report = load_modules(&mut registry, &modules);
    if !report.is_clean() {
        warn!(
            "⚠️ {} module(s) failed to load, continuing without them",
            report.failed.len()
        );
    }

    let framework = Arc::new(Framework::new(registry, &config));

    let mut client = Client::builder(&config.discord_token, options.intents)
        .application_id(config.discord_client_id)
        .event_handler(GatewayHandler::new(framework))
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");

    if let Err(why) = client.start().await {
        error!("Client error: {why:?}");
        return Err(anyhow::anyhow!("Client error: {}", why));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::handler::{PrefixCommandHandler, SlashCommandHandler};
    use crate::commands::prefix::PrefixCommand;
    use crate::commands::slash::SlashCommand;
    use crate::events::handler::{EventEntry, EventHandler};
    use crate::gateway::event::{
        ChatInputInteraction, InboundMessage, InteractionRef, ReadyInfo, UserRef,
    };
    use crate::gateway::mock::MockSession;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Pong;

    #[async_trait]
    impl PrefixCommandHandler for Pong {
        async fn execute(&self, ctx: &BotContext, message: &InboundMessage) -> Result<()> {
            ctx.reply(message, "pong").await
        }
    }

    #[async_trait]
    impl SlashCommandHandler for Pong {
        async fn execute(&self, ctx: &BotContext, interaction: &ChatInputInteraction) -> Result<()> {
            ctx.reply(interaction, "Pong!").await
        }
    }

    struct Counter(Arc<AtomicUsize>);

    #[async_trait]
    impl EventHandler for Counter {
        async fn execute(&self, _ctx: &BotContext, _event: &InboundEvent) -> Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn config() -> Config {
        Config {
            discord_token: "token".to_string(),
            discord_client_id: 42,
            discord_guild_id: MockSession::GUILD_ID,
            command_prefix: "!".to_string(),
            log_level: "info".to_string(),
        }
    }

    fn user() -> UserRef {
        UserRef {
            id: 7,
            name: "rey".to_string(),
            tag: "rey#0007".to_string(),
            bot: false,
        }
    }

    fn ready() -> InboundEvent {
        InboundEvent::Ready(ReadyInfo {
            user: UserRef {
                bot: true,
                ..user()
            },
            guild_count: 1,
            session_id: "session".to_string(),
        })
    }

    fn message(content: &str) -> InboundEvent {
        InboundEvent::Message(InboundMessage {
            id: 10,
            channel_id: 20,
            guild_id: Some(MockSession::GUILD_ID),
            author: user(),
            content: content.to_string(),
        })
    }

    fn registry(counter: &Arc<AtomicUsize>) -> Registry {
        let mut registry = Registry::new();
        registry.register_prefix_command(PrefixCommand::new("ping", Pong));
        registry.register_slash_command(SlashCommand::new("ping", "Replies with Pong!", Pong));
        registry.register_event(EventEntry::on(
            "message-counter",
            EventKind::MessageCreate,
            Counter(Arc::clone(counter)),
        ));
        registry
    }

    #[tokio::test]
    async fn test_ready_publishes_commands_only_once() {
        let counter = Arc::new(AtomicUsize::new(0));
        let framework = Framework::new(registry(&counter), &config());
        let session = Arc::new(MockSession::new());

        framework.handle(session.clone(), ready()).await;
        framework.handle(session.clone(), ready()).await;

        assert_eq!(
            session.publish_calls(),
            vec![(MockSession::GUILD_ID, vec!["ping".to_string()])]
        );
    }

    #[tokio::test]
    async fn test_message_reaches_commands_and_event_handlers() {
        let counter = Arc::new(AtomicUsize::new(0));
        let framework = Framework::new(registry(&counter), &config());
        let session = Arc::new(MockSession::new());

        let delivered = framework.handle(session.clone(), message("!ping")).await;

        assert_eq!(delivered, 2);
        assert_eq!(session.reply_contents(), vec!["pong"]);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_slash_interaction_is_dispatched() {
        let counter = Arc::new(AtomicUsize::new(0));
        let framework = Framework::new(registry(&counter), &config());
        let session = Arc::new(MockSession::new());

        let interaction = ChatInputInteraction {
            interaction: InteractionRef {
                id: 1,
                token: "token".to_string(),
            },
            name: "ping".to_string(),
            options: Vec::new(),
            user: user(),
            guild_id: Some(MockSession::GUILD_ID),
            channel_id: 20,
        };
        framework
            .handle(session.clone(), InboundEvent::ChatInput(interaction))
            .await;

        assert_eq!(session.reply_contents(), vec!["Pong!"]);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_listener_table_layout() {
        let counter = Arc::new(AtomicUsize::new(0));
        let framework = Framework::new(registry(&counter), &config());

        assert_eq!(framework.gateway().listener_count(EventKind::InteractionCreate), 1);
        assert_eq!(framework.gateway().listener_count(EventKind::MessageCreate), 2);
        assert_eq!(framework.gateway().listener_count(EventKind::Ready), 1);
        assert_eq!(framework.gateway().listener_count(EventKind::GuildCreate), 0);
        assert!(framework.registry().slash_command("ping").is_some());
    }

    #[test]
    fn test_default_intents_include_message_content() {
        let options = BootstrapOptions::default();
        assert!(options.intents.contains(GatewayIntents::MESSAGE_CONTENT));
        assert!(options.intents.contains(GatewayIntents::GUILDS));
        assert!(options.intents.contains(GatewayIntents::GUILD_MESSAGES));
    }
}
