//! Event handler trait and registry entry

use anyhow::Result;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::commands::registry::Named;
use crate::core::context::BotContext;
use crate::gateway::event::{EventKind, InboundEvent};

/// Trait for handlers bound to a platform event
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn execute(&self, ctx: &BotContext, event: &InboundEvent) -> Result<()>;
}

/// A registered event handler
#[derive(Clone)]
pub struct EventEntry {
    /// Unique within `event`
    pub name: String,
    pub event: EventKind,
    /// Fire at most once per session
    pub once: bool,
    pub handler: Arc<dyn EventHandler>,
}

impl EventEntry {
    /// Recurring handler for `event`
    pub fn on(
        name: impl Into<String>,
        event: EventKind,
        handler: impl EventHandler + 'static,
    ) -> Self {
        EventEntry {
            name: name.into(),
            event,
            once: false,
            handler: Arc::new(handler),
        }
    }

    /// One-shot handler for `event`
    pub fn once(
        name: impl Into<String>,
        event: EventKind,
        handler: impl EventHandler + 'static,
    ) -> Self {
        EventEntry {
            once: true,
            ..Self::on(name, event, handler)
        }
    }
}

impl Named for EventEntry {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for EventEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEntry")
            .field("name", &self.name)
            .field("event", &self.event)
            .field("once", &self.once)
            .finish_non_exhaustive()
    }
}
