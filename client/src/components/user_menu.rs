//! Signed-in user badge with sign-out.

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::identity::IdentityProvider;
use crate::state::auth::{AuthState, SessionStatus};
use crate::state::toast::{Notifier, ToastLevel, ToastState};

#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let identity = expect_context::<Arc<dyn IdentityProvider>>();
    let busy = RwSignal::new(false);

    let viewer = move || auth.with(|s| s.viewer().cloned());

    let on_sign_out = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let identity = identity.clone();
        leptos::task::spawn_local(async move {
            match identity.sign_out().await {
                Ok(()) => {
                    let _ = auth.try_update(|s| *s = std::mem::take(s).apply(Ok(SessionStatus::SignedOut)));
                }
                Err(e) => {
                    leptos::logging::error!("sign out failed: {e}");
                    toasts.toast(ToastLevel::Error, "Sign out failed. Please try again.");
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="user-menu">
            {move || viewer().map(|v| {
                let name = v.display_name().to_owned();
                let avatar = match v.image.clone() {
                    Some(src) => view! { <img class="user-menu__avatar" src=src alt=name.clone()/> }.into_any(),
                    None => view! {
                        <span class="user-menu__avatar user-menu__avatar--placeholder">
                            {name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()}
                        </span>
                    }.into_any(),
                };
                view! {
                    {avatar}
                    <span class="user-menu__name">{name}</span>
                }
            })}
            <button class="btn btn-secondary btn-small" disabled=move || busy.get() on:click=on_sign_out>
                "Sign out"
            </button>
        </div>
    }
}
