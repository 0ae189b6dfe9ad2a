//! In-memory session for tests

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;

use super::event::{
    AutocompleteInteraction, ChatInputInteraction, CommandOption, FocusedOption, GuildInfo,
    InboundMessage, InteractionRef, ReplyTarget, UserRef,
};
use super::session::{PublishedCommand, Session};
use crate::commands::slash::CommandDescriptor;
use crate::core::response::{AutocompleteChoice, Reply};

/// Records everything sent through it
pub struct MockSession {
    pub replies: Mutex<Vec<(ReplyTarget, Reply)>>,
    pub autocompletes: Mutex<Vec<(InteractionRef, Vec<AutocompleteChoice>)>>,
    pub published: Mutex<Vec<(u64, Vec<String>)>>,
    guild: Option<GuildInfo>,
    fail_publish: bool,
    fail_replies: bool,
}

impl MockSession {
    pub const GUILD_ID: u64 = 1000;

    pub fn new() -> Self {
        MockSession {
            replies: Mutex::new(Vec::new()),
            autocompletes: Mutex::new(Vec::new()),
            published: Mutex::new(Vec::new()),
            guild: Some(GuildInfo {
                id: Self::GUILD_ID,
                name: "Test Guild".to_string(),
                member_count: Some(3),
            }),
            fail_publish: false,
            fail_replies: false,
        }
    }

    pub fn without_guild() -> Self {
        MockSession {
            guild: None,
            ..Self::new()
        }
    }

    pub fn failing_publish() -> Self {
        MockSession {
            fail_publish: true,
            ..Self::new()
        }
    }

    pub fn failing_replies() -> Self {
        MockSession {
            fail_replies: true,
            ..Self::new()
        }
    }

    pub fn reply_contents(&self) -> Vec<String> {
        self.replies
            .lock()
            .unwrap()
            .iter()
            .map(|(_, reply)| reply.content.clone())
            .collect()
    }

    pub fn replies(&self) -> Vec<(ReplyTarget, Reply)> {
        self.replies.lock().unwrap().clone()
    }

    pub fn publish_calls(&self) -> Vec<(u64, Vec<String>)> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl Session for MockSession {
    async fn send_reply(&self, target: &ReplyTarget, reply: Reply) -> Result<()> {
        if self.fail_replies {
            anyhow::bail!("reply channel closed");
        }
        self.replies.lock().unwrap().push((target.clone(), reply));
        Ok(())
    }

    async fn send_autocomplete(
        &self,
        interaction: &InteractionRef,
        choices: &[AutocompleteChoice],
    ) -> Result<()> {
        self.autocompletes
            .lock()
            .unwrap()
            .push((interaction.clone(), choices.to_vec()));
        Ok(())
    }

    async fn find_guild(&self, guild_id: u64) -> Option<GuildInfo> {
        self.guild.clone().filter(|guild| guild.id == guild_id)
    }

    async fn bulk_set_commands(
        &self,
        guild_id: u64,
        commands: &[CommandDescriptor],
    ) -> Result<Vec<PublishedCommand>> {
        let names: Vec<String> = commands.iter().map(|c| c.name.clone()).collect();
        self.published.lock().unwrap().push((guild_id, names.clone()));
        if self.fail_publish {
            anyhow::bail!("503 Service Unavailable");
        }
        Ok(names
            .into_iter()
            .enumerate()
            .map(|(i, name)| PublishedCommand {
                id: i as u64 + 1,
                name,
            })
            .collect())
    }
}

pub fn user(name: &str) -> UserRef {
    UserRef {
        id: 7,
        name: name.to_string(),
        tag: format!("{name}#0007"),
        bot: false,
    }
}

pub fn chat_input(name: &str, options: Vec<CommandOption>) -> ChatInputInteraction {
    ChatInputInteraction {
        interaction: InteractionRef {
            id: 1,
            token: "interaction-token".to_string(),
        },
        name: name.to_string(),
        options,
        user: user("rey"),
        guild_id: Some(MockSession::GUILD_ID),
        channel_id: 20,
    }
}

pub fn autocomplete(name: &str, focused: &str, value: &str) -> AutocompleteInteraction {
    AutocompleteInteraction {
        interaction: InteractionRef {
            id: 2,
            token: "autocomplete-token".to_string(),
        },
        name: name.to_string(),
        options: Vec::new(),
        focused: Some(FocusedOption {
            name: focused.to_string(),
            value: value.to_string(),
        }),
        user: user("rey"),
        guild_id: Some(MockSession::GUILD_ID),
    }
}

pub fn message(content: &str) -> InboundMessage {
    InboundMessage {
        id: 10,
        channel_id: 20,
        guild_id: Some(MockSession::GUILD_ID),
        author: user("finn"),
        content: content.to_string(),
    }
}
