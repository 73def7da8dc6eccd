//! Root application component with context providers and the auth-gated router.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::{auth_gate::AuthGate, auth_provider::AuthProvider, toaster::Toaster};
use crate::net::api::ApiClient;
use crate::net::channels::{ApiChannelDirectory, ChannelDirectory};
use crate::net::identity::IdentityProvider;
use crate::state::{auth::AuthState, toast::ToastState};

/// Root application component.
///
/// `identity` and `client` are injected so the same tree runs against the
/// browser session or a fake provider.
#[component]
pub fn App(identity: Arc<dyn IdentityProvider>, client: ApiClient) -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    let directory: Arc<dyn ChannelDirectory> = Arc::new(ApiChannelDirectory::new(client.clone()));

    provide_context(auth);
    provide_context(toasts);
    provide_context(identity);
    provide_context(directory);
    provide_context(client);

    view! {
        <Title text="Chatter"/>
        <AuthProvider>
            <Router>
                <AuthGate/>
            </Router>
            <Toaster/>
        </AuthProvider>
    }
}
