//! Listener table
//!
//! serenity hands events to a single trait object; this table gives the
//! framework `on`/`once` registration per event kind on top of that.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, error};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::event::{EventKind, InboundEvent};
use crate::core::context::BotContext;

/// Something that reacts to an inbound event
#[async_trait]
pub trait Listener: Send + Sync {
    /// Label used in log lines
    fn label(&self) -> String;

    async fn call(&self, ctx: &BotContext, event: &InboundEvent) -> Result<()>;
}

struct Registration {
    listener: Arc<dyn Listener>,
    once: bool,
    fired: AtomicBool,
}

impl Registration {
    /// Claim the right to run. Once-listeners succeed a single time.
    fn claim(&self) -> bool {
        !self.once || !self.fired.swap(true, Ordering::AcqRel)
    }
}

/// Listeners keyed by event kind, in installation order
#[derive(Default)]
pub struct Gateway {
    listeners: HashMap<EventKind, Vec<Registration>>,
}

impl Gateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a listener that runs on every matching event
    pub fn on(&mut self, kind: EventKind, listener: Arc<dyn Listener>) {
        self.install(kind, listener, false);
    }

    /// Install a listener that runs on the first matching event only
    pub fn once(&mut self, kind: EventKind, listener: Arc<dyn Listener>) {
        self.install(kind, listener, true);
    }

    fn install(&mut self, kind: EventKind, listener: Arc<dyn Listener>, once: bool) {
        debug!(
            "🔗 Installing {} listener '{}' on {kind}",
            if once { "once" } else { "on" },
            listener.label()
        );
        self.listeners.entry(kind).or_default().push(Registration {
            listener,
            once,
            fired: AtomicBool::new(false),
        });
    }

    /// Number of listeners installed for an event kind (fired or not)
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Deliver an event to its listeners, one after another
    ///
    /// A failing listener is logged and does not stop the others.
    /// Returns how many listeners were invoked.
    pub async fn emit(&self, ctx: &BotContext, event: &InboundEvent) -> usize {
        let kind = event.kind();
        let Some(registrations) = self.listeners.get(&kind) else {
            debug!("[{}] No listeners for {kind}", ctx.request_id());
            return 0;
        };

        let mut invoked = 0;
        for registration in registrations {
            if !registration.claim() {
                continue;
            }
            invoked += 1;
            if let Err(e) = registration.listener.call(ctx, event).await {
                error!(
                    "[{}] ❌ Listener '{}' failed on {kind}: {e:#}",
                    ctx.request_id(),
                    registration.listener.label()
                );
            }
        }
        invoked
    }
}
