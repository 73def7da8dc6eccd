//! Modal for creating a chat channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from the home page. Loads the member picker from the chat
//! directory on mount, assembles the request via `ChannelForm`, and on success
//! activates the new channel through the `?channel=` query parameter.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::channels::{ChannelDirectory, load_members};
use crate::net::types::ChatUser;
use crate::state::auth::AuthState;
use crate::state::channel_form::{ChannelForm, ChannelKind, created_message};
use crate::state::toast::{Notifier, ToastLevel, ToastState};

#[component]
pub fn CreateChannelModal(on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let directory = expect_context::<Arc<dyn ChannelDirectory>>();
    let navigate = use_navigate();
    let form = RwSignal::new(ChannelForm::default());

    if let Some(viewer) = auth.with_untracked(|s| s.viewer().cloned()) {
        form.update(|f| f.loading_users = true);
        let directory = directory.clone();
        leptos::task::spawn_local(async move {
            let users = load_members(directory.as_ref(), &viewer.id).await;
            let _ = form.try_update(|f| f.set_users(users));
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let viewer = auth.with_untracked(|s| s.viewer().cloned());
        let Some(Ok(request)) = form.try_update(|f| f.begin_submit(viewer.as_ref())) else {
            return;
        };
        let name = form.with_untracked(|f| f.name.clone());
        let directory = directory.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = directory.create_channel(&request).await;
            let _ = form.try_update(ChannelForm::finish_submit);
            match result {
                Ok(()) => {
                    toasts.toast(ToastLevel::Success, &created_message(&name));
                    navigate(&format!("/?channel={}", request.id), NavigateOptions::default());
                    on_close.run(());
                }
                Err(e) => leptos::logging::error!("Error creating the channel: {e}"),
            }
        });
    };

    let roster = Memo::new(move |_| form.with(|f| (f.loading_users, f.users.clone())));

    view! {
        <div class="create-channel-modal-overlay">
            <div class="create-channel-modal">
                <div class="create-channel-modal__header">
                    <h2>"Create a channel"</h2>
                    <button class="create-channel-modal__close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>

                <form class="create-channel-modal__form" on:submit=on_submit>
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <div class="form-error">
                            <span>{move || form.with(|f| f.error.clone().unwrap_or_default())}</span>
                        </div>
                    </Show>

                    <div class="form-group">
                        <div class="input-with-icon">
                            <span class="input-icon">"#"</span>
                            <input
                                id="channelName"
                                type="text"
                                placeholder="e.g. marketing"
                                maxlength="22"
                                autofocus=true
                                class=move || {
                                    if form.with(|f| f.error.is_some()) {
                                        "form-input form-input--error"
                                    } else {
                                        "form-input"
                                    }
                                }
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.set_name(&event_target_value(&ev)))
                            />
                        </div>
                        {move || {
                            form.with(ChannelForm::id_preview)
                                .map(|id| view! { <div class="form-hint">"Channel ID will be: #" {id}</div> })
                        }}
                    </div>

                    <div class="form-group">
                        <span>"Channel type"</span>
                        <div class="radio-group">
                            <KindOption form kind=ChannelKind::Public title="Public" description="Anyone can join this channel"/>
                            <KindOption form kind=ChannelKind::Private title="Private" description="Only invited members can join"/>
                        </div>
                    </div>

                    <Show when=move || form.with(|f| f.kind == ChannelKind::Private)>
                        <div class="form-group">
                            <span>"Add members"</span>
                            <div class="member-selection-header">
                                <button
                                    type="button"
                                    class="btn btn-secondary btn-small"
                                    disabled=move || form.with(|f| f.loading_users || f.users.is_empty())
                                    on:click=move |_| form.update(ChannelForm::select_everyone)
                                >
                                    "Select Everyone"
                                </button>
                                <span class="selected-count">
                                    {move || format!("{} selected", form.with(|f| f.selected.len()))}
                                </span>
                            </div>
                            <div class="members-list">
                                {move || {
                                    let (loading, users) = roster.get();
                                    member_list(form, loading, users)
                                }}
                            </div>
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="description">"Description (optional)"</label>
                        <textarea
                            id="description"
                            class="form-textarea"
                            rows="3"
                            placeholder="What's this channel about?"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="create-channel-modal__actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || !form.with(ChannelForm::can_submit)>
                            {move || if form.with(|f| f.creating) { "Creating..." } else { "Create Channel" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
fn KindOption(
    form: RwSignal<ChannelForm>,
    kind: ChannelKind,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    let value = match kind {
        ChannelKind::Public => "public",
        ChannelKind::Private => "private",
    };
    view! {
        <label class="radio-option">
            <input
                type="radio"
                name="channelType"
                value=value
                prop:checked=move || form.with(|f| f.kind == kind)
                on:change=move |_| form.update(|f| f.set_kind(kind))
            />
            <div class="radio-content">
                <div class="radio-title">{title}</div>
                <div class="radio-description">{description}</div>
            </div>
        </label>
    }
}

fn member_list(form: RwSignal<ChannelForm>, loading: bool, users: Vec<ChatUser>) -> AnyView {
    if loading {
        return view! { <p>"Loading users..."</p> }.into_any();
    }
    if users.is_empty() {
        return view! { <p>"No users found"</p> }.into_any();
    }
    users
        .into_iter()
        .map(|user| {
            let checked_id = user.id.clone();
            let toggle_id = user.id.clone();
            let name = user.display_name().to_owned();
            let avatar = match user.image.clone() {
                Some(src) => view! { <img src=src alt=name.clone() class="member-avatar"/> }.into_any(),
                None => view! {
                    <div class="member-avatar member-avatar-placeholder">
                        <span>{user.initial()}</span>
                    </div>
                }
                .into_any(),
            };
            view! {
                <label class="member-item">
                    <input
                        type="checkbox"
                        class="member-checkbox"
                        prop:checked=move || form.with(|f| f.is_selected(&checked_id))
                        on:change=move |_| form.update(|f| f.toggle_member(&toggle_id))
                    />
                    {avatar}
                    <span class="member-name">{name}</span>
                </label>
            }
        })
        .collect_view()
        .into_any()
}
