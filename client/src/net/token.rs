//! Bearer-token attachment for outbound API requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`TokenPipeline::install`] registers a [`TokenInterceptor`] on the shared
//! [`ApiClient`] for as long as the pipeline value lives. Each request awaits
//! its own credential fetch; there is no coalescing of concurrent fetches.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch never blocks the request: it goes out without a header.
//! Only auth/token-flavoured failures reach the user, as one error toast.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::net::api::{ApiClient, ApiError, InterceptorId, OutboundRequest, RequestInterceptor};
use crate::net::identity::IdentityProvider;
use crate::state::toast::{Notifier, ToastLevel};

pub const AUTH_ISSUE_MESSAGE: &str = "Authentication issue. Please refresh the page.";

/// Interceptor that sets `Authorization: Bearer <token>` from the identity provider.
pub struct TokenInterceptor {
    identity: Arc<dyn IdentityProvider>,
    notifier: Arc<dyn Notifier>,
    live: Arc<AtomicBool>,
}

#[async_trait(?Send)]
impl RequestInterceptor for TokenInterceptor {
    async fn intercept(&self, request: &mut OutboundRequest) -> Result<(), ApiError> {
        let fetched = self.identity.fetch_credential().await;

        // Torn down while the fetch was in flight.
        if !self.live.load(Ordering::Acquire) {
            leptos::logging::log!("dropping credential fetched after pipeline teardown");
            return Ok(());
        }

        match fetched {
            Ok(Some(token)) if !token.is_empty() => {
                request.set_header("authorization", format!("Bearer {token}"));
            }
            Ok(_) => {}
            Err(e) => {
                if e.is_auth_related() {
                    self.notifier.toast(ToastLevel::Error, AUTH_ISSUE_MESSAGE);
                }
                leptos::logging::error!("Error getting token: {e}");
            }
        }
        Ok(())
    }
}

/// Scoped registration of a [`TokenInterceptor`].
///
/// Dropping the pipeline releases the registration exactly once and disarms
/// the interceptor, so fetches still in flight no longer decorate requests.
pub struct TokenPipeline {
    client: ApiClient,
    id: InterceptorId,
    live: Arc<AtomicBool>,
}

impl TokenPipeline {
    pub fn install(client: &ApiClient, identity: Arc<dyn IdentityProvider>, notifier: Arc<dyn Notifier>) -> Self {
        let live = Arc::new(AtomicBool::new(true));
        let interceptor = TokenInterceptor { identity, notifier, live: live.clone() };
        let id = client.register_request_interceptor(Arc::new(interceptor));
        Self { client: client.clone(), id, live }
    }

    pub fn id(&self) -> InterceptorId {
        self.id
    }
}

impl Drop for TokenPipeline {
    fn drop(&mut self) {
        self.live.store(false, Ordering::Release);
        if !self.client.release_interceptor(self.id) {
            leptos::logging::warn!("token interceptor {:?} was already released", self.id);
        }
    }
}
