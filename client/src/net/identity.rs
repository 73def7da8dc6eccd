//! Identity provider capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider owns the session. The app only sees it through
//! [`IdentityProvider`], injected via context, so the route gate and the
//! token pipeline can run against a fake in tests.
//!
//! ERROR HANDLING
//! ==============
//! Resolution failures leave the app in `Loading`; credential failures degrade
//! to anonymous requests. Neither panics or blocks.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use async_trait::async_trait;

use crate::state::auth::SessionStatus;

/// Failure talking to the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
    #[error("identity request failed with status {0}")]
    Status(u16),
    #[error("{0}")]
    Message(String),
}

impl IdentityError {
    /// Whether the failure reads as an authentication/token problem worth
    /// telling the user about. Matching is on the message text and is
    /// case-sensitive, so "Token expired" does not count.
    pub fn is_auth_related(&self) -> bool {
        let message = self.to_string();
        message.contains("auth") || message.contains("token")
    }
}

/// Session and credential access backed by an external identity provider.
#[async_trait(?Send)]
pub trait IdentityProvider: Send + Sync {
    /// Determine whether someone is signed in.
    async fn resolve_session(&self) -> Result<SessionStatus, IdentityError>;

    /// Fetch a fresh bearer credential. `Ok(None)` means anonymous.
    async fn fetch_credential(&self) -> Result<Option<String>, IdentityError>;

    async fn sign_out(&self) -> Result<(), IdentityError>;
}

#[cfg(any(test, feature = "csr"))]
fn session_endpoint(base_url: &str, path: &str) -> String {
    format!("{}/auth/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
fn is_signed_out_status(status: u16) -> bool {
    matches!(status, 401 | 403)
}

/// Browser identity provider backed by cookie-authenticated session endpoints.
///
/// Talks to the endpoints directly with `gloo-net` rather than through
/// [`crate::net::api::ApiClient`], so token fetches never pass through the
/// token interceptor themselves.
#[cfg(feature = "csr")]
pub struct SessionIdentity {
    base_url: String,
}

#[cfg(feature = "csr")]
impl SessionIdentity {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    async fn get(&self, path: &str) -> Result<gloo_net::http::Response, IdentityError> {
        gloo_net::http::Request::get(&session_endpoint(&self.base_url, path))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| IdentityError::Unavailable(e.to_string()))
    }
}

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl IdentityProvider for SessionIdentity {
    async fn resolve_session(&self) -> Result<SessionStatus, IdentityError> {
        let resp = self.get("me").await?;
        match resp.status() {
            200 => {
                let viewer = resp
                    .json::<crate::net::types::Viewer>()
                    .await
                    .map_err(|e| IdentityError::Message(format!("invalid session payload: {e}")))?;
                Ok(SessionStatus::SignedIn(viewer))
            }
            status if is_signed_out_status(status) => Ok(SessionStatus::SignedOut),
            status => Err(IdentityError::Status(status)),
        }
    }

    async fn fetch_credential(&self) -> Result<Option<String>, IdentityError> {
        let resp = self.get("session-token").await?;
        match resp.status() {
            200 => {
                let body = resp
                    .json::<crate::net::types::SessionToken>()
                    .await
                    .map_err(|e| IdentityError::Message(format!("invalid token response: {e}")))?;
                Ok(body.token)
            }
            status if is_signed_out_status(status) => Ok(None),
            status => Err(IdentityError::Status(status)),
        }
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        let resp = gloo_net::http::Request::post(&session_endpoint(&self.base_url, "logout"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| IdentityError::Unavailable(e.to_string()))?;
        if !resp.ok() {
            return Err(IdentityError::Status(resp.status()));
        }
        Ok(())
    }
}
