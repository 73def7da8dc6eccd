//! Shared wire DTOs for the identity and chat-directory boundaries.
//!
//! DESIGN
//! ======
//! Field names follow the JSON the session endpoints and chat directory emit,
//! so serde round-trips stay lossless without per-call mapping code.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in person as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Viewer {
    /// Name shown in the user menu, falling back to the raw id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.id)
    }
}

/// A member of the chat directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl ChatUser {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.id)
    }

    /// Uppercased first character of the display name, used for avatar placeholders.
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Envelope returned by the directory's user query.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<ChatUser>,
}

/// Session token payload from the identity provider.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SessionToken {
    #[serde(default)]
    pub token: Option<String>,
}

/// Channel visibility as understood by the chat service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

/// Channel attributes sent with a create request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChannelData {
    pub name: String,
    pub created_by_id: String,
    pub members: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    pub visibility: Visibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discoverable: Option<bool>,
}

/// Fully assembled channel-creation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChannelRequest {
    #[serde(rename = "type")]
    pub channel_type: String,
    pub id: String,
    pub data: ChannelData,
}
