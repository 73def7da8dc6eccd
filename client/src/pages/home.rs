//! Signed-in landing page.
//!
//! The active channel lives in the `?channel=` query parameter so it survives
//! reloads and can be linked.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::create_channel_modal::CreateChannelModal;
use crate::components::user_menu::UserMenu;

#[component]
pub fn HomePage() -> impl IntoView {
    let query = use_query_map();
    let show_create = RwSignal::new(false);
    let active_channel = move || query.with(|q| q.get("channel")).filter(|c| !c.is_empty());

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Welcome to Chatter"</h1>
                <UserMenu/>
            </header>

            <section class="home-page__channel">
                {move || match active_channel() {
                    Some(id) => view! { <h2 class="channel-title">"# " {id}</h2> }.into_any(),
                    None => view! { <p class="channel-empty">"Pick or create a channel to start chatting."</p> }.into_any(),
                }}
                <button class="btn btn-primary" on:click=move |_| show_create.set(true)>
                    "Create channel"
                </button>
            </section>

            <Show when=move || show_create.get()>
                <CreateChannelModal on_close=Callback::new(move |()| show_create.set(false))/>
            </Show>
        </div>
    }
}
