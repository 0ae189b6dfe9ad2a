//! Event dispatch
//!
//! Every event identifier in the registry gets up to two aggregate
//! listeners on the gateway: one for its recurring handlers and one, fired
//! at most once, for its one-shot handlers. Within a group, handlers run
//! sequentially in registration order and the first failure ends that
//! dispatch for the rest of the group.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};

use std::sync::Arc;

use crate::commands::registry::Registry;
use crate::core::context::BotContext;
use crate::core::error::BotError;
use crate::events::handler::EventEntry;
use crate::gateway::event::{EventKind, InboundEvent};
use crate::gateway::listeners::{Gateway, Listener};

/// Handlers of one event identifier sharing the same once-flag
pub struct EventGroup {
    event: EventKind,
    once: bool,
    handlers: Vec<EventEntry>,
}

impl EventGroup {
    pub fn new(event: EventKind, once: bool, handlers: Vec<EventEntry>) -> Self {
        Self {
            event,
            once,
            handlers,
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[async_trait]
impl Listener for EventGroup {
    fn label(&self) -> String {
        format!(
            "{} {} handler(s) on {}",
            self.handlers.len(),
            if self.once { "once" } else { "recurring" },
            self.event
        )
    }

    async fn call(&self, ctx: &BotContext, event: &InboundEvent) -> Result<()> {
        for entry in &self.handlers {
            debug!(
                "[{}] ⚡ Running event handler '{}' ({})",
                ctx.request_id(),
                entry.name,
                self.event
            );
            entry
                .handler
                .execute(ctx, event)
                .await
                .map_err(|e| BotError::handler(entry.name.clone(), e))?;
        }
        Ok(())
    }
}

/// Install aggregate listeners for every event identifier in the registry
///
/// Returns the number of listeners installed.
pub fn install_event_handlers(registry: &Registry, gateway: &mut Gateway) -> usize {
    let mut installed = 0;

    for bucket in registry.event_buckets() {
        let (once, recurring): (Vec<EventEntry>, Vec<EventEntry>) =
            bucket.handlers.iter().cloned().partition(|entry| entry.once);

        let recurring = EventGroup::new(bucket.event, false, recurring);
        if !recurring.is_empty() {
            info!("🔔 {} recurring handler(s) attached to {}", recurring.len(), bucket.event);
            gateway.on(bucket.event, Arc::new(recurring));
            installed += 1;
        }

        let once = EventGroup::new(bucket.event, true, once);
        if !once.is_empty() {
            info!("🔔 {} one-shot handler(s) attached to {}", once.len(), bucket.event);
            gateway.once(bucket.event, Arc::new(once));
            installed += 1;
        }
    }

    installed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::handler::EventHandler;
    use crate::gateway::event::{InboundMessage, UserRef};
    use crate::gateway::mock::MockSession;
    use std::sync::Mutex;

    struct Recording {
        name: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
        fail: bool,
    }

    #[async_trait]
    impl EventHandler for Recording {
        async fn execute(&self, _ctx: &BotContext, _event: &InboundEvent) -> Result<()> {
            self.log.lock().unwrap().push(self.name);
            if self.fail {
                anyhow::bail!("{} failed", self.name);
            }
            Ok(())
        }
    }

    fn recording(
        name: &'static str,
        log: &Arc<Mutex<Vec<&'static str>>>,
        fail: bool,
    ) -> Recording {
        Recording {
            name,
            log: Arc::clone(log),
            fail,
        }
    }

    fn message_event() -> InboundEvent {
        InboundEvent::Message(InboundMessage {
            id: 1,
            channel_id: 2,
            guild_id: None,
            author: UserRef {
                id: 3,
                name: "chewie".to_string(),
                tag: "chewie#0003".to_string(),
                bot: false,
            },
            content: "hello there".to_string(),
        })
    }

    fn ctx() -> BotContext {
        BotContext::new(Arc::new(MockSession::new()))
    }

    #[tokio::test]
    async fn test_recurring_handlers_fire_every_time_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = Registry::new();
        for name in ["h1", "h2", "h3"] {
            registry.register_event(EventEntry::on(
                name,
                EventKind::MessageCreate,
                recording(name, &log, false),
            ));
        }
        let mut gateway = Gateway::new();
        assert_eq!(install_event_handlers(&registry, &mut gateway), 1);

        let ctx = ctx();
        gateway.emit(&ctx, &message_event()).await;
        gateway.emit(&ctx, &message_event()).await;

        assert_eq!(
            *log.lock().unwrap(),
            vec!["h1", "h2", "h3", "h1", "h2", "h3"]
        );
    }

    #[tokio::test]
    async fn test_once_handler_fires_once_across_firings() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = Registry::new();
        registry.register_event(EventEntry::once(
            "greeting",
            EventKind::MessageCreate,
            recording("greeting", &log, false),
        ));
        registry.register_event(EventEntry::on(
            "logger",
            EventKind::MessageCreate,
            recording("logger", &log, false),
        ));
        let mut gateway = Gateway::new();
        assert_eq!(install_event_handlers(&registry, &mut gateway), 2);

        let ctx = ctx();
        gateway.emit(&ctx, &message_event()).await;
        gateway.emit(&ctx, &message_event()).await;

        let log = log.lock().unwrap();
        assert_eq!(log.iter().filter(|n| **n == "greeting").count(), 1);
        assert_eq!(log.iter().filter(|n| **n == "logger").count(), 2);
        // Once-handler stays registered even though it can no longer fire
        assert_eq!(registry.event_handlers(EventKind::MessageCreate).len(), 2);
    }

    #[tokio::test]
    async fn test_first_failure_stops_rest_of_group_but_not_next_dispatch() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = Registry::new();
        registry.register_event(EventEntry::on(
            "ok",
            EventKind::MessageCreate,
            recording("ok", &log, false),
        ));
        registry.register_event(EventEntry::on(
            "broken",
            EventKind::MessageCreate,
            recording("broken", &log, true),
        ));
        registry.register_event(EventEntry::on(
            "after",
            EventKind::MessageCreate,
            recording("after", &log, false),
        ));
        let mut gateway = Gateway::new();
        install_event_handlers(&registry, &mut gateway);

        let ctx = ctx();
        gateway.emit(&ctx, &message_event()).await;
        gateway.emit(&ctx, &message_event()).await;

        assert_eq!(
            *log.lock().unwrap(),
            vec!["ok", "broken", "ok", "broken"]
        );
    }

    #[tokio::test]
    async fn test_group_error_names_the_failing_handler() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let group = EventGroup::new(
            EventKind::MessageCreate,
            false,
            vec![EventEntry::on(
                "broken",
                EventKind::MessageCreate,
                recording("broken", &log, true),
            )],
        );

        let err = group.call(&ctx(), &message_event()).await.unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_empty_registry_installs_nothing() {
        let mut gateway = Gateway::new();
        assert_eq!(install_event_handlers(&Registry::new(), &mut gateway), 0);
        assert_eq!(gateway.listener_count(EventKind::Ready), 0);
    }
}
