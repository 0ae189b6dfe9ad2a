//! # Command System
//!
//! Slash (/) and prefix command registration, dispatch and publication.
//!
//! - **Version**: 3.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 3.0.0: Prefix commands, autocomplete and a shared registry for events
//! - 2.0.0: Modular handler infrastructure (handler trait, context, registry)
//! - 1.0.0: Initial slash command handling

pub mod dispatcher;
pub mod handler;
pub mod prefix;
pub mod publish;
pub mod registry;
pub mod slash;

pub use dispatcher::{CommandDispatcher, DispatchOutcome};
pub use handler::{PrefixCommandHandler, SlashCommandHandler};
pub use prefix::PrefixCommand;
pub use publish::{CommandPublisher, PublishOutcome};
pub use registry::{Collection, EventBucket, Named, Registry};
pub use slash::{CommandDescriptor, CommandKind, OptionDescriptor, OptionKind, SlashCommand};
