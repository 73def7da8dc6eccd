//! Chat directory access: member lookup and channel creation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat service owns channels and membership. The create-channel modal
//! reaches it through [`ChannelDirectory`]; the default implementation goes
//! through the shared [`ApiClient`], so every call carries the bearer token.

#[cfg(test)]
#[path = "channels_test.rs"]
mod channels_test;

use async_trait::async_trait;

use crate::net::api::{ApiClient, ApiError, Method};
use crate::net::types::{ChannelRequest, ChatUser, UsersResponse};

pub const MEMBER_QUERY_LIMIT: usize = 100;

/// Prefix the chat service uses for call-recording bot accounts.
pub const RECORDING_USER_PREFIX: &str = "recording-";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserQuery {
    pub sort: &'static str,
    pub limit: usize,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self { sort: "name", limit: MEMBER_QUERY_LIMIT }
    }
}

#[async_trait(?Send)]
pub trait ChannelDirectory: Send + Sync {
    async fn query_users(&self, query: &UserQuery) -> Result<Vec<ChatUser>, ApiError>;

    /// Create the channel (or join it if it already exists).
    async fn create_channel(&self, request: &ChannelRequest) -> Result<(), ApiError>;
}

pub struct ApiChannelDirectory {
    client: ApiClient,
}

impl ApiChannelDirectory {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn users_path(query: &UserQuery) -> String {
    format!("/chat/users?sort={}&limit={}", query.sort, query.limit)
}

#[async_trait(?Send)]
impl ChannelDirectory for ApiChannelDirectory {
    async fn query_users(&self, query: &UserQuery) -> Result<Vec<ChatUser>, ApiError> {
        let resp: UsersResponse = self.client.get_json(&users_path(query)).await?;
        Ok(resp.users)
    }

    async fn create_channel(&self, request: &ChannelRequest) -> Result<(), ApiError> {
        let outbound = self.client.request(Method::Post, "/chat/channels").with_json(request)?;
        self.client.send(outbound).await?;
        Ok(())
    }
}

/// Users the viewer can add to a channel: everyone except the viewer and
/// recording bots.
pub fn selectable_users(users: Vec<ChatUser>, viewer_id: &str) -> Vec<ChatUser> {
    users
        .into_iter()
        .filter(|u| u.id != viewer_id)
        .filter(|u| !u.id.starts_with(RECORDING_USER_PREFIX))
        .collect()
}

/// Load the member picker list. Failures are logged and yield an empty list.
pub async fn load_members(directory: &dyn ChannelDirectory, viewer_id: &str) -> Vec<ChatUser> {
    match directory.query_users(&UserQuery::default()).await {
        Ok(users) => selectable_users(users, viewer_id),
        Err(e) => {
            leptos::logging::error!("Error fetching users: {e}");
            Vec::new()
        }
    }
}
