//! Identity wiring for the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once above the router. While mounted it owns the token pipeline
//! registration on the shared `ApiClient`, and it pushes the identity
//! provider's resolution into the `AuthState` signal the gate reads.

#[cfg(test)]
#[path = "auth_provider_test.rs"]
mod auth_provider_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::identity::IdentityProvider;
use crate::net::token::TokenPipeline;
use crate::state::auth::AuthState;
use crate::state::toast::{Notifier, ToastState};

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let client = expect_context::<ApiClient>();
    let identity = expect_context::<Arc<dyn IdentityProvider>>();

    bind_token_pipeline(&client, identity.clone(), Arc::new(toasts));

    leptos::task::spawn_local(async move {
        let resolution = identity.resolve_session().await;
        if let Err(e) = &resolution {
            leptos::logging::warn!("identity provider did not resolve: {e}");
        }
        let _ = auth.try_update(|state| *state = std::mem::take(state).apply(resolution));
    });

    children()
}

/// Install the token pipeline for the lifetime of the current reactive owner.
fn bind_token_pipeline(client: &ApiClient, identity: Arc<dyn IdentityProvider>, notifier: Arc<dyn Notifier>) {
    let pipeline = TokenPipeline::install(client, identity, notifier);
    on_cleanup(move || drop(pipeline));
}
