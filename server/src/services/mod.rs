//! Server-side domain services.

pub mod session;
