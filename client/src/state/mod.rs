//! Reactive client state shared through context.

pub mod notice;
pub mod session;
pub mod ui;
