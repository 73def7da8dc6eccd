//! Auth-gated route resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `AuthGate` component feeds the current [`AuthState`] and location into
//! [`RouteTable::resolve`] and applies the result. Patterns are leptos_router
//! segments matched with [`PossibleRouteMatch::test`]; resolution itself is a
//! pure function so every navigation outcome can be tested without a router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::{ParamSegment, PossibleRouteMatch, StaticSegment};

use crate::state::auth::AuthState;

pub const HOME_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/auth";

/// Pages reachable through the gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Auth,
    Call { id: String },
}

/// Sign-in requirement attached to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Reachable whether or not anyone is signed in.
    Public,
    SignedIn,
    SignedOut,
}

impl Access {
    fn admits(self, state: &AuthState) -> bool {
        match state {
            AuthState::Loading => false,
            AuthState::SignedIn(_) => matches!(self, Self::Public | Self::SignedIn),
            AuthState::SignedOut => matches!(self, Self::Public | Self::SignedOut),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Auth,
    Call,
}

pub type RoutePattern = &'static (dyn PossibleRouteMatch + Send + Sync);

/// One route. A `ParamSegment("id")` in the pattern supplies the call id.
#[derive(Clone, Copy)]
pub struct RouteEntry {
    pub pattern: RoutePattern,
    pub page: PageKind,
    pub access: Access,
}

/// What the gate should do for a navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Auth has not resolved; render a neutral placeholder and do not navigate.
    Placeholder,
    Render(Page),
    Redirect(&'static str),
}

#[derive(Clone, Copy)]
pub struct RouteTable {
    entries: &'static [RouteEntry],
    signed_in_fallback: &'static str,
    signed_out_fallback: &'static str,
}

const CHAT_ROUTES: &[RouteEntry] = &[
    RouteEntry { pattern: &StaticSegment(""), page: PageKind::Home, access: Access::SignedIn },
    RouteEntry {
        pattern: &(StaticSegment("call"), ParamSegment("id")),
        page: PageKind::Call,
        access: Access::SignedIn,
    },
    RouteEntry { pattern: &StaticSegment("auth"), page: PageKind::Auth, access: Access::SignedOut },
];

impl RouteTable {
    pub const fn new(
        entries: &'static [RouteEntry],
        signed_in_fallback: &'static str,
        signed_out_fallback: &'static str,
    ) -> Self {
        Self { entries, signed_in_fallback, signed_out_fallback }
    }

    /// The application's route table.
    pub const fn chat() -> Self {
        Self::new(CHAT_ROUTES, HOME_PATH, SIGN_IN_PATH)
    }

    pub fn resolve(&self, state: &AuthState, path: &str) -> GateDecision {
        let fallback = match state {
            AuthState::Loading => return GateDecision::Placeholder,
            AuthState::SignedIn(_) => self.signed_in_fallback,
            AuthState::SignedOut => self.signed_out_fallback,
        };
        let path = route_path(path);
        self.entries
            .iter()
            .filter(|entry| entry.access.admits(state))
            .find_map(|entry| match_entry(entry, path))
            .map_or(GateDecision::Redirect(fallback), GateDecision::Render)
    }
}

/// The path with any query string or fragment removed.
fn route_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Render target for `entry` if its pattern consumes the whole path.
fn match_entry(entry: &RouteEntry, path: &str) -> Option<Page> {
    let matched = entry.pattern.test(path).filter(|m| m.is_complete())?;
    Some(match entry.page {
        PageKind::Home => Page::Home,
        PageKind::Auth => Page::Auth,
        PageKind::Call => {
            let id = matched.params().into_iter().find_map(|(key, value)| (key == "id").then_some(value))?;
            Page::Call { id }
        }
    })
}
