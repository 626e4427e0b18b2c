//! Networking modules for the HTTP envelope protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the raw HTTP calls, `request` turns their responses into
//! typed results and applies failure policies, and `types` defines the shared
//! wire schema.

pub mod api;
pub mod request;
pub mod types;
