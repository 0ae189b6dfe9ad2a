//! Shared context for command and event handlers
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.0.0: Session-backed context minted per inbound event
//! - 1.0.0: Initial implementation with core shared state

use anyhow::Result;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::response::Reply;
use crate::gateway::event::ReplyTarget;
use crate::gateway::session::Session;

/// Per-event context handed to every handler
///
/// Cheap to clone; the session is shared.
#[derive(Clone)]
pub struct BotContext {
    session: Arc<dyn Session>,
    request_id: Uuid,
}

impl BotContext {
    pub fn new(session: Arc<dyn Session>) -> Self {
        Self {
            session,
            request_id: Uuid::new_v4(),
        }
    }

    pub fn session(&self) -> &dyn Session {
        self.session.as_ref()
    }

    /// Correlation id for log lines belonging to this event
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Send a reply through the session
    ///
    /// ```ignore
    /// ctx.reply(interaction, Reply::ephemeral("Done")).await?;
    /// ctx.reply(message, "pong").await?;
    /// ```
    pub async fn reply(
        &self,
        target: impl Into<ReplyTarget>,
        reply: impl Into<Reply>,
    ) -> Result<()> {
        let target = target.into();
        self.session.send_reply(&target, reply.into()).await
    }
}
