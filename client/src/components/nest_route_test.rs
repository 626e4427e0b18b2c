use super::*;

// =============================================================
// Helpers
// =============================================================

fn blank(_: &'static [RouteDescriptor]) -> AnyView {
    ().into_any()
}

static NESTED: [RouteDescriptor; 2] = [
    RouteDescriptor::exact("/ad/page1", blank),
    RouteDescriptor::prefix("/ad", blank),
];

static TABLE: [RouteDescriptor; 5] = [
    RouteDescriptor::exact("/", blank),
    RouteDescriptor::exact("/a", blank),
    RouteDescriptor::prefix("/ad", blank).with_children(&NESTED),
    RouteDescriptor::exact("/log", blank),
    RouteDescriptor::prefix("/", blank),
];

fn matched_index(routes: &[RouteDescriptor], path: &str) -> Option<usize> {
    let matched = match_route(routes, path)?;
    routes.iter().position(|r| std::ptr::eq(r, matched))
}

// =============================================================
// path_matches
// =============================================================

#[test]
fn exact_requires_equal_path() {
    assert!(path_matches("/a", true, "/a"));
    assert!(!path_matches("/a", true, "/a/b"));
    assert!(!path_matches("/a", true, "/"));
}

#[test]
fn exact_ignores_single_trailing_slash() {
    assert!(path_matches("/a", true, "/a/"));
    assert!(path_matches("/a/", true, "/a"));
}

#[test]
fn exact_root_matches_only_root() {
    assert!(path_matches("/", true, "/"));
    assert!(path_matches("/", true, ""));
    assert!(!path_matches("/", true, "/p"));
}

#[test]
fn prefix_matches_on_segment_boundary() {
    assert!(path_matches("/ad", false, "/ad"));
    assert!(path_matches("/ad", false, "/ad/"));
    assert!(path_matches("/ad", false, "/ad/page1"));
    assert!(!path_matches("/ad", false, "/adx"));
    assert!(!path_matches("/ad", false, "/a"));
}

#[test]
fn prefix_root_matches_everything() {
    for path in ["/", "/z", "/ad/page9", ""] {
        assert!(path_matches("/", false, path), "{path:?} should match the root prefix");
    }
}

// =============================================================
// match_route
// =============================================================

#[test]
fn exact_entry_wins_over_fallback() {
    static ROUTES: [RouteDescriptor; 2] = [RouteDescriptor::exact("/a", blank), RouteDescriptor::prefix("/", blank)];
    assert_eq!(matched_index(&ROUTES, "/a"), Some(0));
    assert_eq!(matched_index(&ROUTES, "/z"), Some(1));
}

#[test]
fn first_match_wins_in_declaration_order() {
    assert_eq!(matched_index(&TABLE, "/"), Some(0));
    assert_eq!(matched_index(&TABLE, "/a"), Some(1));
    assert_eq!(matched_index(&TABLE, "/ad"), Some(2));
    assert_eq!(matched_index(&TABLE, "/ad/page2"), Some(2));
    assert_eq!(matched_index(&TABLE, "/log"), Some(3));
    assert_eq!(matched_index(&TABLE, "/log/extra"), Some(4));
    assert_eq!(matched_index(&TABLE, "/nowhere"), Some(4));
}

#[test]
fn nested_table_resolves_relative_to_full_path() {
    let outer = match_route(&TABLE, "/ad/page1").unwrap();
    assert_eq!(outer.children.len(), 2);
    assert_eq!(matched_index(outer.children, "/ad/page1"), Some(0));
    assert_eq!(matched_index(outer.children, "/ad/missing"), Some(1));
}

#[test]
fn no_match_yields_none() {
    static ROUTES: [RouteDescriptor; 1] = [RouteDescriptor::exact("/only", blank)];
    assert!(match_route(&ROUTES, "/other").is_none());
    assert!(match_route(&[], "/").is_none());
}

#[test]
fn constructors_set_exactness() {
    assert!(RouteDescriptor::exact("/x", blank).exact);
    assert!(!RouteDescriptor::prefix("/x", blank).exact);
    assert!(RouteDescriptor::exact("/x", blank).children.is_empty());
}
