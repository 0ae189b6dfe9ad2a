//! Session lifecycle event handlers

pub mod lifecycle;
