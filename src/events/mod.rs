//! # Event Handlers
//!
//! Named handlers bound to gateway events, grouped per event identifier.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

pub mod dispatcher;
pub mod handler;

pub use dispatcher::{install_event_handlers, EventGroup};
pub use handler::{EventEntry, EventHandler};
