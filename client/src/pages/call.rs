//! Call room page. Media and signaling are handled by the chat service.

use leptos::prelude::*;

#[component]
pub fn CallPage(id: String) -> impl IntoView {
    view! {
        <div class="call-page">
            <h1>"Call " {id}</h1>
            <a href="/" class="btn btn-secondary">"Back to chat"</a>
        </div>
    }
}
