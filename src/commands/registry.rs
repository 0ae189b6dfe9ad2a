//! Command and event registry
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.0.0: One generic collection for slash commands, prefix commands and events
//! - 1.0.0: Initial implementation for handler dispatch

use log::{debug, info};
use std::collections::HashMap;

use super::prefix::PrefixCommand;
use super::slash::{CommandDescriptor, SlashCommand};
use crate::events::handler::EventEntry;
use crate::gateway::event::EventKind;

/// Anything stored in a [`Collection`] is keyed by its name
pub trait Named {
    fn name(&self) -> &str;
}

/// Name-keyed entries in registration order
///
/// Inserting under an existing name replaces that entry in place, so the
/// latest registration wins and the original position is kept.
///
/// # Example
///
/// ```ignore
/// let mut commands = Collection::new();
/// commands.insert(PrefixCommand::new("ping", PingHandler));
///
/// if let Some(command) = commands.get("ping") {
///     command.handler.execute(&ctx, &message).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Collection<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Named> Collection<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert or overwrite, returning the entry that was replaced
    pub fn insert(&mut self, entry: T) -> Option<T> {
        let existing = self.index.get(entry.name()).copied();
        match existing {
            Some(position) => Some(std::mem::replace(&mut self.entries[position], entry)),
            None => {
                self.index
                    .insert(entry.name().to_string(), self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    /// Returns None if nothing is registered under `name`
    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        let position = *self.index.get(name)?;
        self.entries.get_mut(position)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Named::name)
    }
}

impl<T: Named> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handlers sharing one event identifier, keyed by handler name
#[derive(Debug, Clone)]
pub struct EventBucket {
    pub event: EventKind,
    pub handlers: Collection<EventEntry>,
}

impl Named for EventBucket {
    fn name(&self) -> &str {
        self.event.as_str()
    }
}

/// Registry of slash commands, prefix commands and event handlers
///
/// Built mutably while modules load, then frozen behind an `Arc` for the
/// lifetime of the session. Nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    slash_commands: Collection<SlashCommand>,
    prefix_commands: Collection<PrefixCommand>,
    events: Collection<EventBucket>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_slash_command(&mut self, command: SlashCommand) {
        let name = command.data.name.clone();
        if self.slash_commands.insert(command).is_some() {
            debug!("Slash command /{name} replaced an earlier registration");
        }
        info!("📝 Slash command /{name} registered");
    }

    pub fn register_prefix_command(&mut self, command: PrefixCommand) {
        let name = command.name.clone();
        if self.prefix_commands.insert(command).is_some() {
            debug!("Prefix command {name} replaced an earlier registration");
        }
        info!("📝 Prefix command {name} registered");
    }

    /// Register an event handler under its event's bucket, creating the bucket if needed
    pub fn register_event(&mut self, entry: EventEntry) {
        let event = entry.event;
        let name = entry.name.clone();

        if !self.events.contains(event.as_str()) {
            self.events.insert(EventBucket {
                event,
                handlers: Collection::new(),
            });
        }
        if let Some(bucket) = self.events.get_mut(event.as_str()) {
            if bucket.handlers.insert(entry).is_some() {
                debug!("Event handler '{name}' ({event}) replaced an earlier registration");
            }
        }
        info!("📝 Event handler '{name}' registered ({event})");
    }

    pub fn slash_command(&self, name: &str) -> Option<&SlashCommand> {
        self.slash_commands.get(name)
    }

    pub fn prefix_command(&self, name: &str) -> Option<&PrefixCommand> {
        self.prefix_commands.get(name)
    }

    /// Handlers for `event` in registration order; empty if none
    pub fn event_handlers(&self, event: EventKind) -> &[EventEntry] {
        self.events
            .get(event.as_str())
            .map(|bucket| bucket.handlers.as_slice())
            .unwrap_or(&[])
    }

    pub fn slash_commands(&self) -> &Collection<SlashCommand> {
        &self.slash_commands
    }

    pub fn prefix_commands(&self) -> &Collection<PrefixCommand> {
        &self.prefix_commands
    }

    /// Every event identifier with at least one handler
    pub fn event_buckets(&self) -> std::slice::Iter<'_, EventBucket> {
        self.events.iter()
    }

    /// Snapshot of every slash command's descriptor, in registration order
    pub fn slash_descriptors(&self) -> Vec<CommandDescriptor> {
        self.slash_commands
            .iter()
            .map(|command| command.data.clone())
            .collect()
    }
}
