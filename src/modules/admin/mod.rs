//! Moderation commands

pub mod ban;
