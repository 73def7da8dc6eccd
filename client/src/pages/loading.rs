//! Loading placeholder shown by the gate before auth resolves.

use leptos::prelude::*;

/// Neutral placeholder while the identity provider resolves.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" aria-busy="true">
            <div class="loading-screen__spinner"></div>
        </div>
    }
}
