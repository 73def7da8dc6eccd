//! Toast stack rendered over the app.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[cfg(feature = "csr")]
const TOAST_TTL: std::time::Duration = std::time::Duration::from_secs(4);

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    #[cfg(feature = "csr")]
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(TOAST_TTL).await;
                        let _ = toasts.try_update(|s| s.dismiss(id));
                    });
                    view! {
                        <div class=toast.level.class() role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| toasts.update(|s| s.dismiss(id))>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
