//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. The admin sub-application declares its own nested route
//! table under `admin`.

pub mod admin;
pub mod login;
pub mod not_found;
pub mod user_layout;
