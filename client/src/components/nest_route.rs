//! Recursive route composer.
//!
//! ARCHITECTURE
//! ============
//! Route tables are `&'static` slices of `RouteDescriptor`, declared once per
//! sub-application. `NestRoute` renders the first descriptor matching the
//! current path and hands that descriptor's `children` to the rendered view,
//! which may mount another `NestRoute` for them. Order is significant: the
//! first match wins, so a trailing prefix descriptor acts as the not-found
//! fallback for its table.

#[cfg(test)]
#[path = "nest_route_test.rs"]
mod nest_route_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Renders a matched route; receives the route's nested table.
pub type RenderFn = fn(&'static [RouteDescriptor]) -> AnyView;

/// Declarative path → view mapping.
#[derive(Clone, Copy)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub exact: bool,
    pub render: RenderFn,
    pub children: &'static [RouteDescriptor],
}

impl RouteDescriptor {
    /// Matches only `path` itself.
    #[must_use]
    pub const fn exact(path: &'static str, render: RenderFn) -> Self {
        Self { path, exact: true, render, children: &[] }
    }

    /// Matches `path` and everything beneath it.
    #[must_use]
    pub const fn prefix(path: &'static str, render: RenderFn) -> Self {
        Self { path, exact: false, render, children: &[] }
    }

    #[must_use]
    pub const fn with_children(mut self, children: &'static [RouteDescriptor]) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub fn matches(&self, current: &str) -> bool {
        path_matches(self.path, self.exact, current)
    }
}

impl std::fmt::Debug for RouteDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("path", &self.path)
            .field("exact", &self.exact)
            .field("children", &self.children.len())
            .finish_non_exhaustive()
    }
}

/// Strip one trailing `/` (except from the root) and ensure a leading `/`.
fn normalize(path: &str) -> String {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if trimmed.starts_with('/') { trimmed.to_owned() } else { format!("/{trimmed}") }
}

/// Exact or segment-boundary prefix match of `pattern` against `current`.
#[must_use]
pub fn path_matches(pattern: &str, exact: bool, current: &str) -> bool {
    let pattern = normalize(pattern);
    let current = normalize(current);

    if exact {
        return pattern == current;
    }
    if pattern == "/" {
        return true;
    }
    match current.strip_prefix(pattern.as_str()) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// First descriptor in `routes` matching `current`.
#[must_use]
pub fn match_route<'a>(routes: &'a [RouteDescriptor], current: &str) -> Option<&'a RouteDescriptor> {
    routes.iter().find(|route| route.matches(current))
}

/// Render the first route in `routes` matching the current location.
#[component]
pub fn NestRoute(routes: &'static [RouteDescriptor]) -> impl IntoView {
    let location = use_location();

    move || {
        let path = location.pathname.get();
        match_route(routes, &path).map(|route| (route.render)(route.children))
    }
}
