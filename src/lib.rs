// Core layer - config, errors, replies, handler context
pub mod core;

// Gateway layer - inbound events, outbound session, serenity adapter
pub mod gateway;

// Application layer - registry, dispatch, publication
pub mod commands;
pub mod events;

// Wiring
pub mod client;
pub mod loader;

// Bundled handler definitions
pub mod modules;

pub use client::{bootstrap, BootstrapOptions, Framework};
pub use commands::{PrefixCommand, Registry, SlashCommand};
pub use core::{BotContext, BotError, Config, Reply};
pub use events::EventEntry;
pub use loader::{load_modules, LoadReport, Module};
