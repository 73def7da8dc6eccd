use super::*;
use crate::net::channels::selectable_users;
use crate::test_support::chat_user;

fn viewer() -> Viewer {
    Viewer { id: "me".to_owned(), name: Some("Me".to_owned()), image: None }
}

fn form_with_users() -> ChannelForm {
    let mut form = ChannelForm::default();
    let listed = vec![chat_user("me", "Me"), chat_user("u1", "Alice"), chat_user("u2", "Bob"), chat_user("recording-1", "Rec")];
    form.set_users(selectable_users(listed, "me"));
    form
}

// =============================================================
// Name validation
// =============================================================

#[test]
fn validate_requires_name() {
    assert_eq!(validate_channel_name(""), Err(NAME_REQUIRED));
    assert_eq!(validate_channel_name("   "), Err(NAME_REQUIRED));
}

#[test]
fn validate_enforces_length_bounds() {
    assert_eq!(validate_channel_name("ab"), Err(NAME_TOO_SHORT));
    assert_eq!(validate_channel_name("abc"), Ok(()));
    assert_eq!(validate_channel_name(&"a".repeat(22)), Ok(()));
    assert_eq!(validate_channel_name(&"a".repeat(23)), Err(NAME_TOO_LONG));
}

#[test]
fn validate_counts_characters_not_bytes() {
    assert_eq!(validate_channel_name("café"), Ok(()));
    assert_eq!(validate_channel_name(&"é".repeat(22)), Ok(()));
}

#[test]
fn set_name_tracks_validation_error() {
    let mut form = ChannelForm::default();
    form.set_name("ab");
    assert_eq!(form.error.as_deref(), Some(NAME_TOO_SHORT));
    form.set_name("abc");
    assert!(form.error.is_none());
}

// =============================================================
// Channel ids
// =============================================================

#[test]
fn channel_id_slugifies_name() {
    assert_eq!(channel_id("  Marketing Team  "), "marketing-team");
    assert_eq!(channel_id("Q3   Launch!!"), "q3-launch");
    assert_eq!(channel_id("dev_ops-2"), "dev_ops-2");
}

#[test]
fn channel_id_truncates_to_twenty_chars() {
    let id = channel_id("abcdefghij klmnopqrstuv");
    assert_eq!(id, "abcdefghij-klmnopqrs");
    assert_eq!(id.chars().count(), CHANNEL_ID_MAX_CHARS);
}

#[test]
fn preview_keeps_edges_and_length() {
    assert_eq!(channel_id_preview(" Hello World "), "-hello-world-");
    let mut form = ChannelForm::default();
    assert_eq!(form.id_preview(), None);
    form.set_name("Big Plans");
    assert_eq!(form.id_preview().as_deref(), Some("big-plans"));
}

// =============================================================
// Member selection
// =============================================================

#[test]
fn set_users_selects_everyone_for_public() {
    let form = form_with_users();
    let ids: Vec<&str> = form.users.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["u1", "u2"]);
    assert_eq!(form.selected, vec!["u1", "u2"]);
    assert!(!form.loading_users);
}

#[test]
fn switching_kind_resets_selection() {
    let mut form = form_with_users();
    form.set_kind(ChannelKind::Private);
    assert!(form.selected.is_empty());
    form.set_kind(ChannelKind::Public);
    assert_eq!(form.selected, vec!["u1", "u2"]);
}

#[test]
fn toggle_and_select_everyone() {
    let mut form = form_with_users();
    form.set_kind(ChannelKind::Private);
    form.toggle_member("u2");
    assert!(form.is_selected("u2"));
    assert!(!form.is_selected("u1"));
    form.toggle_member("u2");
    assert!(!form.is_selected("u2"));
    form.select_everyone();
    assert_eq!(form.selected, vec!["u1", "u2"]);
}

// =============================================================
// Submit
// =============================================================

#[test]
fn can_submit_needs_name_and_idle_form() {
    let mut form = ChannelForm::default();
    assert!(!form.can_submit());
    form.set_name("general");
    assert!(form.can_submit());
    form.creating = true;
    assert!(!form.can_submit());
}

#[test]
fn submit_public_channel_request() {
    let mut form = form_with_users();
    form.set_name(" General Chat ");
    form.description = "Company-wide".to_owned();

    let request = form.begin_submit(Some(&viewer())).unwrap();

    assert!(form.creating);
    assert_eq!(request.channel_type, "messaging");
    assert_eq!(request.id, "general-chat");
    assert_eq!(request.data.name, "General Chat");
    assert_eq!(request.data.created_by_id, "me");
    assert_eq!(request.data.members, vec!["me", "u1", "u2"]);
    assert_eq!(request.data.description.as_deref(), Some("Company-wide"));
    assert_eq!(request.data.visibility, Visibility::Public);
    assert_eq!(request.data.discoverable, Some(true));
    assert_eq!(request.data.private, None);
}

#[test]
fn submit_private_channel_request() {
    let mut form = form_with_users();
    form.set_kind(ChannelKind::Private);
    form.toggle_member("u2");
    form.set_name("secret");

    let request = form.begin_submit(Some(&viewer())).unwrap();

    assert_eq!(request.data.members, vec!["me", "u2"]);
    assert_eq!(request.data.private, Some(true));
    assert_eq!(request.data.visibility, Visibility::Private);
    assert_eq!(request.data.discoverable, None);
    assert_eq!(request.data.description, None);
}

#[test]
fn submit_deduplicates_viewer_in_members() {
    let mut form = ChannelForm::default();
    form.set_name("team");
    form.selected = vec!["me".to_owned(), "u1".to_owned()];
    let request = form.begin_submit(Some(&viewer())).unwrap();
    assert_eq!(request.data.members, vec!["me", "u1"]);
}

#[test]
fn submit_blocked_by_invalid_name() {
    let mut form = ChannelForm::default();
    form.set_name("ab");
    assert_eq!(form.begin_submit(Some(&viewer())), Err(SubmitBlocked::Invalid(NAME_TOO_SHORT)));
    assert!(!form.creating);
    assert_eq!(form.error.as_deref(), Some(NAME_TOO_SHORT));
}

#[test]
fn submit_blocked_when_slug_empty() {
    let mut form = ChannelForm::default();
    form.set_name("!!!");
    assert_eq!(form.begin_submit(Some(&viewer())), Err(SubmitBlocked::Invalid(NAME_WITHOUT_ID)));
    assert_eq!(form.error.as_deref(), Some(NAME_WITHOUT_ID));
}

#[test]
fn submit_blocked_while_in_flight_or_signed_out() {
    let mut form = ChannelForm::default();
    form.set_name("general");
    assert_eq!(form.begin_submit(None), Err(SubmitBlocked::NoViewer));

    form.begin_submit(Some(&viewer())).unwrap();
    assert_eq!(form.begin_submit(Some(&viewer())), Err(SubmitBlocked::InFlight));

    form.finish_submit();
    assert!(!form.creating);
    assert!(form.begin_submit(Some(&viewer())).is_ok());
}

#[test]
fn created_message_quotes_name() {
    assert_eq!(created_message("general"), "Channel \"general\" created successfully!");
}
