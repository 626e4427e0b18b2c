//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (banners, header, footer, current user)
//! and the route composer, reading shared state from Leptos context providers.

pub mod footer;
pub mod location_listener;
pub mod login_user;
pub mod nest_route;
pub mod notice_host;
pub mod site_header;
