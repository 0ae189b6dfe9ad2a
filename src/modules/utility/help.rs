//! Help command
//!
//! Handles: /help [topic]
//!
//! `topic` is autocompleted from [`TOPICS`] by case-insensitive substring.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;

use crate::commands::handler::SlashCommandHandler;
use crate::commands::registry::Registry;
use crate::commands::slash::{OptionDescriptor, OptionKind, SlashCommand};
use crate::core::context::BotContext;
use crate::core::response::{AutocompleteChoice, Reply};
use crate::gateway::event::{get_string_option, AutocompleteInteraction, ChatInputInteraction};
use crate::loader::Module;

/// (topic, help text)
pub const TOPICS: &[(&str, &str)] = &[
    (
        "ping",
        "`/ping` or `!ping` - Test bot responsiveness",
    ),
    (
        "ban",
        "`/ban <user> [reason]` - Ban a user from the server\n\
         `!ban <user-id> [reason]` - Same, by user ID",
    ),
    (
        "help",
        "`/help [topic]` - Show help, optionally for a single topic",
    ),
    (
        "prefix",
        "Text commands start with the configured prefix (default `!`), e.g. `!ping`",
    ),
];

pub struct HelpModule;

impl Module for HelpModule {
    fn name(&self) -> &str {
        "utility/help"
    }

    fn register(&self, registry: &mut Registry) -> Result<()> {
        registry.register_slash_command(
            SlashCommand::new("help", "Show available commands", Help)
                .option(
                    OptionDescriptor::new("topic", "Topic to show help for", OptionKind::String)
                        .autocomplete(true),
                )
                .dm_permission(true),
        );
        Ok(())
    }
}

pub struct Help;

impl Help {
    fn full_text() -> String {
        let mut text = String::from("**Available Commands:**\n");
        for (_, body) in TOPICS {
            text.push_str(body);
            text.push('\n');
        }
        text
    }

    fn suggestions(typed: &str) -> Vec<AutocompleteChoice> {
        let typed = typed.to_lowercase();
        TOPICS
            .iter()
            .filter(|(topic, _)| topic.contains(typed.as_str()))
            .map(|(topic, _)| AutocompleteChoice::string(*topic, *topic))
            .collect()
    }
}

#[async_trait]
impl SlashCommandHandler for Help {
    async fn execute(&self, ctx: &BotContext, interaction: &ChatInputInteraction) -> Result<()> {
        let text = match get_string_option(&interaction.options, "topic") {
            Some(topic) => match TOPICS.iter().find(|(name, _)| *name == topic) {
                Some((_, body)) => body.to_string(),
                None => format!("No help for `{topic}`.\n\n{}", Self::full_text()),
            },
            None => Self::full_text(),
        };
        ctx.reply(interaction, Reply::ephemeral(text)).await
    }

    async fn autocomplete(
        &self,
        _ctx: &BotContext,
        interaction: &AutocompleteInteraction,
    ) -> Result<Option<Vec<AutocompleteChoice>>> {
        match &interaction.focused {
            Some(focused) if focused.name == "topic" => {
                Ok(Some(Self::suggestions(&focused.value)))
            }
            _ => Ok(None),
        }
    }
}
