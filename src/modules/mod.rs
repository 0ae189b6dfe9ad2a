//! # Bundled Modules
//!
//! Handler definitions shipped with the bot. The host passes
//! [`all_modules`] to [`crate::client::bootstrap`]; load order is list
//! order, so a later module overwrites an earlier one's same-named entry.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: admin/ban, utility/ping, utility/help, events/lifecycle

pub mod admin;
pub mod events;
pub mod utility;

use crate::loader::Module;

/// Every bundled module, in load order
pub fn all_modules() -> Vec<Box<dyn Module>> {
    vec![
        Box::new(admin::ban::BanModule),
        Box::new(utility::ping::PingModule),
        Box::new(utility::help::HelpModule),
        Box::new(events::lifecycle::LifecycleModule),
    ]
}
