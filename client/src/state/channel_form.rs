//! Create-channel form model.
//!
//! DESIGN
//! ======
//! Validation, member selection and request assembly live here as plain data
//! so the modal component only wires signals to these methods.

#[cfg(test)]
#[path = "channel_form_test.rs"]
mod channel_form_test;

use crate::net::types::{ChannelData, ChannelRequest, ChatUser, Viewer, Visibility};

pub const CHANNEL_NAME_MIN_CHARS: usize = 3;
pub const CHANNEL_NAME_MAX_CHARS: usize = 22;
pub const CHANNEL_ID_MAX_CHARS: usize = 20;
pub const CHANNEL_TYPE: &str = "messaging";

pub const NAME_REQUIRED: &str = "Channel name is required";
pub const NAME_TOO_SHORT: &str = "Channel name must be at least 3 characters";
pub const NAME_TOO_LONG: &str = "Channel name must be less than 22 characters";
pub const NAME_WITHOUT_ID: &str = "Channel name must contain letters or numbers";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelKind {
    #[default]
    Public,
    Private,
}

/// Why a submit did not produce a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    Invalid(&'static str),
    InFlight,
    NoViewer,
}

/// Check a raw channel name.
///
/// # Errors
///
/// Returns the message to show next to the name field.
pub fn validate_channel_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err(NAME_REQUIRED);
    }
    let chars = name.chars().count();
    if chars < CHANNEL_NAME_MIN_CHARS {
        return Err(NAME_TOO_SHORT);
    }
    if chars > CHANNEL_NAME_MAX_CHARS {
        return Err(NAME_TOO_LONG);
    }
    Ok(())
}

/// Lowercase, collapse whitespace runs to `-`, keep only `[a-z0-9-_]`.
fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_' {
            out.push(c);
        }
    }
    out
}

/// Channel id derived from a display name.
pub fn channel_id(name: &str) -> String {
    slugify(name.trim()).chars().take(CHANNEL_ID_MAX_CHARS).collect()
}

/// Id preview shown while typing: same rules, untrimmed and untruncated.
pub fn channel_id_preview(name: &str) -> String {
    slugify(name)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelForm {
    pub name: String,
    pub kind: ChannelKind,
    pub description: String,
    /// Users available to add, already excluding the viewer.
    pub users: Vec<ChatUser>,
    pub selected: Vec<String>,
    pub loading_users: bool,
    pub creating: bool,
    pub error: Option<String>,
}

impl ChannelForm {
    pub fn set_name(&mut self, value: &str) {
        self.name = value.to_owned();
        self.error = validate_channel_name(value).err().map(str::to_owned);
    }

    pub fn set_kind(&mut self, kind: ChannelKind) {
        self.kind = kind;
        self.sync_selection();
    }

    /// Install the member picker list (see `net::channels::load_members`).
    pub fn set_users(&mut self, users: Vec<ChatUser>) {
        self.users = users;
        self.loading_users = false;
        self.sync_selection();
    }

    /// Public channels include everyone; private ones start empty.
    fn sync_selection(&mut self) {
        self.selected = match self.kind {
            ChannelKind::Public => self.users.iter().map(|u| u.id.clone()).collect(),
            ChannelKind::Private => Vec::new(),
        };
    }

    pub fn toggle_member(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.to_owned());
        }
    }

    pub fn select_everyone(&mut self) {
        self.selected = self.users.iter().map(|u| u.id.clone()).collect();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty() && !self.creating
    }

    pub fn id_preview(&self) -> Option<String> {
        (!self.name.is_empty()).then(|| channel_id_preview(&self.name))
    }

    /// Validate and assemble the request, marking the form as creating.
    ///
    /// # Errors
    ///
    /// Returns why the submit is blocked; validation failures are also
    /// written to `error`.
    pub fn begin_submit(&mut self, viewer: Option<&Viewer>) -> Result<ChannelRequest, SubmitBlocked> {
        if let Err(message) = validate_channel_name(&self.name) {
            self.error = Some(message.to_owned());
            return Err(SubmitBlocked::Invalid(message));
        }
        if self.creating {
            return Err(SubmitBlocked::InFlight);
        }
        let Some(viewer) = viewer else {
            return Err(SubmitBlocked::NoViewer);
        };
        let id = channel_id(&self.name);
        if id.is_empty() {
            self.error = Some(NAME_WITHOUT_ID.to_owned());
            return Err(SubmitBlocked::Invalid(NAME_WITHOUT_ID));
        }

        self.creating = true;
        self.error = None;

        let mut members = vec![viewer.id.clone()];
        for member in &self.selected {
            if !members.contains(member) {
                members.push(member.clone());
            }
        }
        let (private, visibility, discoverable) = match self.kind {
            ChannelKind::Private => (Some(true), Visibility::Private, None),
            ChannelKind::Public => (None, Visibility::Public, Some(true)),
        };
        let description = (!self.description.is_empty()).then(|| self.description.clone());

        Ok(ChannelRequest {
            channel_type: CHANNEL_TYPE.to_owned(),
            id,
            data: ChannelData {
                name: self.name.trim().to_owned(),
                created_by_id: viewer.id.clone(),
                members,
                description,
                private,
                visibility,
                discoverable,
            },
        })
    }

    /// Clear the in-flight flag once the directory call settles.
    pub fn finish_submit(&mut self) {
        self.creating = false;
    }
}

/// Toast text for a freshly created channel.
pub fn created_message(name: &str) -> String {
    format!("Channel \"{name}\" created successfully!")
}
