//! Route gate driven by auth state.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::pages::{auth::AuthPage, call::CallPage, home::HomePage, loading::LoadingScreen};
use crate::state::auth::AuthState;
use crate::util::auth::{GateDecision, Page, RouteTable};

/// Render the page the current auth state allows, redirecting otherwise.
/// Nothing is decided while auth is still loading.
#[component]
pub fn AuthGate() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();
    let table = RouteTable::chat();

    let decision = Memo::new(move |_| auth.with(|state| table.resolve(state, &location.pathname.get())));

    Effect::new(move || {
        if let GateDecision::Redirect(target) = decision.get() {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GateDecision::Placeholder => view! { <LoadingScreen/> }.into_any(),
        GateDecision::Render(Page::Home) => view! { <HomePage/> }.into_any(),
        GateDecision::Render(Page::Auth) => view! { <AuthPage/> }.into_any(),
        GateDecision::Render(Page::Call { id }) => view! { <CallPage id=id/> }.into_any(),
        GateDecision::Redirect(_) => ().into_any(),
    }
}
