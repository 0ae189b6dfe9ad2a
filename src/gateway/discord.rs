//! Serenity adapter
//!
//! Converts serenity's gateway callbacks into [`InboundEvent`]s and
//! implements [`Session`] on top of serenity's HTTP client and cache.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::json;
use serenity::builder::CreateApplicationCommand;
use serenity::cache::Cache;
use serenity::http::Http;
use serenity::model::application::command::{CommandOptionType, CommandType};
use serenity::model::application::interaction::application_command::{
    ApplicationCommandInteraction, CommandDataOption, CommandDataOptionValue,
};
use serenity::model::application::interaction::autocomplete::AutocompleteInteraction as SerenityAutocomplete;
use serenity::model::application::interaction::Interaction;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::guild::Guild;
use serenity::model::id::{ChannelId, GuildId, MessageId};
use serenity::model::user::User;
use serenity::prelude::{Context, EventHandler as SerenityEventHandler};
use std::sync::Arc;

use super::event::{
    describe_reply, AutocompleteInteraction, ChatInputInteraction, CommandOption, FocusedOption,
    GuildInfo, InboundEvent, InboundMessage, InteractionRef, OptionValue, ReadyInfo, ReplyTarget,
    UserRef,
};
use super::session::{PublishedCommand, Session};
use crate::client::Framework;
use crate::commands::slash::{CommandDescriptor, CommandKind, OptionKind};
use crate::core::response::{AutocompleteChoice, Reply};

/// Interaction callback type: respond with a message
const CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;
/// Interaction callback type: autocomplete result
const AUTOCOMPLETE_RESULT: u8 = 8;
/// Message flag: only the invoking user can see it
const EPHEMERAL_FLAG: u64 = 1 << 6;

/// [`Session`] backed by serenity's HTTP client and cache
#[derive(Clone)]
pub struct SerenitySession {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenitySession {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    pub fn from_context(ctx: &Context) -> Self {
        Self::new(ctx.http.clone(), ctx.cache.clone())
    }
}

#[async_trait]
impl Session for SerenitySession {
    async fn send_reply(&self, target: &ReplyTarget, reply: Reply) -> Result<()> {
        debug!("📤 Sending {}", describe_reply(target, &reply));
        match target {
            ReplyTarget::Interaction(interaction) => {
                let body = json!({
                    "type": CHANNEL_MESSAGE_WITH_SOURCE,
                    "data": {
                        "content": reply.content,
                        "flags": if reply.ephemeral { EPHEMERAL_FLAG } else { 0 },
                    },
                });
                self.http
                    .create_interaction_response(interaction.id, &interaction.token, &body)
                    .await?;
            }
            ReplyTarget::Message(message) => {
                let channel_id = ChannelId(message.channel_id);
                let reference = (channel_id, MessageId(message.message_id));
                channel_id
                    .send_message(&self.http, |m| {
                        m.content(&reply.content).reference_message(reference)
                    })
                    .await?;
            }
        }
        Ok(())
    }

    async fn send_autocomplete(
        &self,
        interaction: &InteractionRef,
        choices: &[AutocompleteChoice],
    ) -> Result<()> {
        let body = json!({
            "type": AUTOCOMPLETE_RESULT,
            "data": { "choices": choices },
        });
        self.http
            .create_interaction_response(interaction.id, &interaction.token, &body)
            .await?;
        Ok(())
    }

    async fn find_guild(&self, guild_id: u64) -> Option<GuildInfo> {
        if let Some(guild) = self.cache.guild(GuildId(guild_id)) {
            return Some(guild_info(&guild));
        }

        match self.http.get_guild(guild_id).await {
            Ok(partial) => Some(GuildInfo {
                id: partial.id.0,
                name: partial.name,
                member_count: partial.approximate_member_count,
            }),
            Err(e) => {
                warn!("Guild {guild_id} is not in cache and could not be fetched: {e}");
                None
            }
        }
    }

    async fn bulk_set_commands(
        &self,
        guild_id: u64,
        commands: &[CommandDescriptor],
    ) -> Result<Vec<PublishedCommand>> {
        let created = GuildId(guild_id)
            .set_application_commands(&self.http, |builder| {
                for command in commands {
                    builder.add_application_command(build_command(command));
                }
                builder
            })
            .await?;

        Ok(created
            .into_iter()
            .map(|command| PublishedCommand {
                id: command.id.0,
                name: command.name,
            })
            .collect())
    }
}

/// Build the serenity command payload for a descriptor
pub fn build_command(descriptor: &CommandDescriptor) -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name(&descriptor.name)
        .description(&descriptor.description)
        .kind(command_type(descriptor.kind))
        .dm_permission(descriptor.dm_permission);

    for option in &descriptor.options {
        command.create_option(|o| {
            o.name(&option.name)
                .description(&option.description)
                .kind(option_type(option.kind))
                .required(option.required)
                .set_autocomplete(option.autocomplete)
        });
    }
    command
}

fn command_type(kind: CommandKind) -> CommandType {
    match kind {
        CommandKind::ChatInput => CommandType::ChatInput,
    }
}

fn option_type(kind: OptionKind) -> CommandOptionType {
    match kind {
        OptionKind::String => CommandOptionType::String,
        OptionKind::Integer => CommandOptionType::Integer,
        OptionKind::Boolean => CommandOptionType::Boolean,
        OptionKind::User => CommandOptionType::User,
        OptionKind::Channel => CommandOptionType::Channel,
        OptionKind::Role => CommandOptionType::Role,
        OptionKind::Mentionable => CommandOptionType::Mentionable,
        OptionKind::Number => CommandOptionType::Number,
        OptionKind::Attachment => CommandOptionType::Attachment,
    }
}

fn user_ref(user: &User) -> UserRef {
    UserRef {
        id: user.id.0,
        name: user.name.clone(),
        tag: user.tag(),
        bot: user.bot,
    }
}

fn guild_info(guild: &Guild) -> GuildInfo {
    GuildInfo {
        id: guild.id.0,
        name: guild.name.clone(),
        member_count: Some(guild.member_count),
    }
}

/// Resolved values first; autocomplete options arrive unresolved
fn option_value(option: &CommandDataOption) -> Option<OptionValue> {
    if let Some(resolved) = &option.resolved {
        let mentionable = option.kind == CommandOptionType::Mentionable;
        return match resolved {
            CommandDataOptionValue::String(s) => Some(OptionValue::String(s.clone())),
            CommandDataOptionValue::Integer(i) => Some(OptionValue::Integer(*i)),
            CommandDataOptionValue::Boolean(b) => Some(OptionValue::Boolean(*b)),
            CommandDataOptionValue::Number(n) => Some(OptionValue::Number(*n)),
            CommandDataOptionValue::User(user, _) if mentionable => {
                Some(OptionValue::Mentionable(user.id.0))
            }
            CommandDataOptionValue::User(user, _) => Some(OptionValue::User(user_ref(user))),
            CommandDataOptionValue::Channel(channel) => Some(OptionValue::Channel(channel.id.0)),
            CommandDataOptionValue::Role(role) if mentionable => {
                Some(OptionValue::Mentionable(role.id.0))
            }
            CommandDataOptionValue::Role(role) => Some(OptionValue::Role(role.id.0)),
            CommandDataOptionValue::Attachment(attachment) => {
                Some(OptionValue::Attachment(attachment.url.clone()))
            }
            #[allow(unreachable_patterns)]
            _ => None,
        };
    }

    let value = option.value.as_ref()?;
    match option.kind {
        CommandOptionType::String => value.as_str().map(|s| OptionValue::String(s.to_string())),
        CommandOptionType::Integer => value.as_i64().map(OptionValue::Integer),
        CommandOptionType::Boolean => value.as_bool().map(OptionValue::Boolean),
        CommandOptionType::Number => value.as_f64().map(OptionValue::Number),
        _ => None,
    }
}

fn convert_options(options: &[CommandDataOption]) -> Vec<CommandOption> {
    options
        .iter()
        .filter_map(|option| {
            option_value(option).map(|value| CommandOption {
                name: option.name.clone(),
                value,
            })
        })
        .collect()
}

impl From<&ApplicationCommandInteraction> for ChatInputInteraction {
    fn from(command: &ApplicationCommandInteraction) -> Self {
        ChatInputInteraction {
            interaction: InteractionRef {
                id: command.id.0,
                token: command.token.clone(),
            },
            name: command.data.name.clone(),
            options: convert_options(&command.data.options),
            user: user_ref(&command.user),
            guild_id: command.guild_id.map(|g| g.0),
            channel_id: command.channel_id.0,
        }
    }
}

impl From<&SerenityAutocomplete> for AutocompleteInteraction {
    fn from(autocomplete: &SerenityAutocomplete) -> Self {
        let focused = autocomplete
            .data
            .options
            .iter()
            .find(|opt| opt.focused)
            .map(|opt| FocusedOption {
                name: opt.name.clone(),
                value: opt
                    .value
                    .as_ref()
                    .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
                    .unwrap_or_default(),
            });

        AutocompleteInteraction {
            interaction: InteractionRef {
                id: autocomplete.id.0,
                token: autocomplete.token.clone(),
            },
            name: autocomplete.data.name.clone(),
            options: convert_options(&autocomplete.data.options),
            focused,
            user: user_ref(&autocomplete.user),
            guild_id: autocomplete.guild_id.map(|g| g.0),
        }
    }
}

impl From<&Message> for InboundMessage {
    fn from(msg: &Message) -> Self {
        InboundMessage {
            id: msg.id.0,
            channel_id: msg.channel_id.0,
            guild_id: msg.guild_id.map(|g| g.0),
            author: user_ref(&msg.author),
            content: msg.content.clone(),
        }
    }
}

impl From<&Ready> for ReadyInfo {
    fn from(ready: &Ready) -> Self {
        ReadyInfo {
            user: UserRef {
                id: ready.user.id.0,
                name: ready.user.name.clone(),
                tag: format!("{}#{:04}", ready.user.name, ready.user.discriminator),
                bot: ready.user.bot,
            },
            guild_count: ready.guilds.len(),
            session_id: ready.session_id.clone(),
        }
    }
}

/// serenity event handler feeding the framework
pub struct GatewayHandler {
    framework: Arc<Framework>,
}

impl GatewayHandler {
    pub fn new(framework: Arc<Framework>) -> Self {
        Self { framework }
    }

    async fn forward(&self, ctx: &Context, event: InboundEvent) {
        let session: Arc<dyn Session> = Arc::new(SerenitySession::from_context(ctx));
        self.framework.handle(session, event).await;
    }
}

#[async_trait]
impl SerenityEventHandler for GatewayHandler {
    async fn message(&self, ctx: Context, msg: Message) {
        self.forward(&ctx, InboundEvent::Message((&msg).into())).await;
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);
        if let Some(shard) = ready.shard {
            info!("⚡ Shard: {}/{}", shard[0] + 1, shard[1]);
        }

        self.forward(&ctx, InboundEvent::Ready((&ready).into())).await;
    }

    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: bool) {
        self.forward(
            &ctx,
            InboundEvent::GuildCreate {
                guild: guild_info(&guild),
                is_new,
            },
        )
        .await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let event = match interaction {
            Interaction::ApplicationCommand(command) => {
                if command.data.kind != CommandType::ChatInput {
                    debug!("Ignoring non chat-input command '{}'", command.data.name);
                    return;
                }
                InboundEvent::ChatInput((&command).into())
            }
            Interaction::Autocomplete(autocomplete) => {
                InboundEvent::Autocomplete((&autocomplete).into())
            }
            Interaction::Ping(_) => {
                info!("Ping interaction received - Discord health check");
                return;
            }
            _ => {
                debug!("Ignoring unsupported interaction kind");
                return;
            }
        };
        self.forward(&ctx, event).await;
    }
}
