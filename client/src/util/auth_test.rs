use super::*;
use crate::net::types::Viewer;

fn signed_in() -> AuthState {
    AuthState::SignedIn(Viewer { id: "u1".to_owned(), name: Some("Alice".to_owned()), image: None })
}

fn resolve(state: &AuthState, path: &str) -> GateDecision {
    RouteTable::chat().resolve(state, path)
}

const SAMPLE_PATHS: &[&str] = &["/", "/auth", "/call/42", "/settings", "/call", "/call/1/extra", "", "/auth?next=/"];

// =============================================================
// Loading
// =============================================================

#[test]
fn loading_never_decides_a_route() {
    for path in SAMPLE_PATHS {
        assert_eq!(resolve(&AuthState::Loading, path), GateDecision::Placeholder, "path {path:?}");
    }
}

// =============================================================
// Signed in
// =============================================================

#[test]
fn signed_in_renders_protected_pages() {
    assert_eq!(resolve(&signed_in(), "/"), GateDecision::Render(Page::Home));
    assert_eq!(resolve(&signed_in(), "/call/42"), GateDecision::Render(Page::Call { id: "42".to_owned() }));
}

#[test]
fn signed_in_redirects_sign_in_page_home() {
    assert_eq!(resolve(&signed_in(), "/auth"), GateDecision::Redirect("/"));
    assert_eq!(resolve(&signed_in(), "/auth/"), GateDecision::Redirect("/"));
}

#[test]
fn signed_in_redirects_unknown_paths_home() {
    for path in ["/settings", "/call", "/call/1/extra", "/nope/deeper"] {
        assert_eq!(resolve(&signed_in(), path), GateDecision::Redirect("/"), "path {path:?}");
    }
}

#[test]
fn signed_in_ignores_query_and_trailing_slash() {
    assert_eq!(resolve(&signed_in(), "/?channel=general"), GateDecision::Render(Page::Home));
    assert_eq!(resolve(&signed_in(), "/call/7/#top"), GateDecision::Render(Page::Call { id: "7".to_owned() }));
}

// =============================================================
// Signed out
// =============================================================

#[test]
fn signed_out_renders_only_sign_in_page() {
    assert_eq!(resolve(&AuthState::SignedOut, "/auth"), GateDecision::Render(Page::Auth));
    assert_eq!(resolve(&AuthState::SignedOut, "/auth?next=/"), GateDecision::Render(Page::Auth));
}

#[test]
fn signed_out_redirects_everything_else_to_sign_in() {
    for path in ["/", "/call/42", "/settings", "", "/call"] {
        assert_eq!(resolve(&AuthState::SignedOut, path), GateDecision::Redirect("/auth"), "path {path:?}");
    }
}

// =============================================================
// Custom tables
// =============================================================

const WITH_PUBLIC: &[RouteEntry] = &[
    RouteEntry { pattern: &StaticSegment(""), page: PageKind::Home, access: Access::SignedIn },
    RouteEntry { pattern: &StaticSegment("auth"), page: PageKind::Auth, access: Access::Public },
];

#[test]
fn public_routes_are_reachable_in_both_states() {
    let table = RouteTable::new(WITH_PUBLIC, HOME_PATH, SIGN_IN_PATH);
    assert_eq!(table.resolve(&signed_in(), "/auth"), GateDecision::Render(Page::Auth));
    assert_eq!(table.resolve(&AuthState::SignedOut, "/auth"), GateDecision::Render(Page::Auth));
    assert_eq!(table.resolve(&AuthState::Loading, "/auth"), GateDecision::Placeholder);
}

#[test]
fn route_path_drops_query_and_fragment() {
    assert_eq!(route_path("/call/9?x=1#y"), "/call/9");
    assert_eq!(route_path("/#top"), "/");
    assert_eq!(route_path("/auth"), "/auth");
}

#[test]
fn call_pattern_needs_exactly_one_id() {
    let call = &CHAT_ROUTES[1];
    assert_eq!(match_entry(call, "/call/abc"), Some(Page::Call { id: "abc".to_owned() }));
    assert_eq!(match_entry(call, "/call"), None);
    assert_eq!(match_entry(call, "/call/1/extra"), None);
    assert_eq!(match_entry(call, "/calls/1"), None);
}
