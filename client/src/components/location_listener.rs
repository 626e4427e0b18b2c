//! Invisible component reporting navigation changes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by public layouts so page-view hooks have one place to attach;
//! currently it only writes the visited path to the console log.

#[cfg(test)]
#[path = "location_listener_test.rs"]
mod location_listener_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Path plus query string, as logged on each navigation.
#[must_use]
pub fn current_path(pathname: &str, search: &str) -> String {
    match search {
        "" => pathname.to_owned(),
        s if s.starts_with('?') => format!("{pathname}{s}"),
        s => format!("{pathname}?{s}"),
    }
}

/// Log the current path whenever pathname or query changes.
#[component]
pub fn LocationListener() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let cur = current_path(&location.pathname.get(), &location.search.get());
        leptos::logging::log!("page visited: {cur}");
    });
}
