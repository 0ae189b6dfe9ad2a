//! Utility commands: ping, help

pub mod help;
pub mod ping;
