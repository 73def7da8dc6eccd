//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Produced by the identity provider, consumed read-only by the route gate and
//! user-aware components. `Loading` is a real state, not an error: the gate
//! waits on it rather than guessing.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::identity::IdentityError;
use crate::net::types::Viewer;

/// Tri-state sign-in status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// The provider has not resolved yet.
    #[default]
    Loading,
    SignedIn(Viewer),
    SignedOut,
}

/// A resolved session as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    SignedIn(Viewer),
    SignedOut,
}

impl AuthState {
    /// Fold a provider resolution into the current state.
    ///
    /// A failed resolution leaves the state untouched, so a provider outage
    /// during startup keeps the app in `Loading`.
    #[must_use]
    pub fn apply(self, resolution: Result<SessionStatus, IdentityError>) -> Self {
        match resolution {
            Ok(SessionStatus::SignedIn(viewer)) => Self::SignedIn(viewer),
            Ok(SessionStatus::SignedOut) => Self::SignedOut,
            Err(_) => self,
        }
    }

    pub fn viewer(&self) -> Option<&Viewer> {
        match self {
            Self::SignedIn(viewer) => Some(viewer),
            Self::Loading | Self::SignedOut => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
