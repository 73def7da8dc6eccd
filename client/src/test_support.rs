//! In-memory fakes for the identity, transport, notifier and directory seams.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::config::ClientConfig;
use crate::net::api::{ApiClient, ApiError, ApiResponse, OutboundRequest};
use crate::net::channels::{ChannelDirectory, UserQuery};
use crate::net::identity::{IdentityError, IdentityProvider};
use crate::net::transport::Transport;
use crate::net::types::{ChannelRequest, ChatUser};
use crate::state::auth::SessionStatus;
use crate::state::toast::{Notifier, ToastLevel};

pub struct FakeIdentity {
    session: Mutex<Result<SessionStatus, IdentityError>>,
    credential: Mutex<Result<Option<String>, IdentityError>>,
    gate: Option<Arc<Notify>>,
    fetches: AtomicUsize,
}

impl FakeIdentity {
    pub fn with_credential(credential: Result<Option<String>, IdentityError>) -> Self {
        Self {
            session: Mutex::new(Ok(SessionStatus::SignedOut)),
            credential: Mutex::new(credential),
            gate: None,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn token(token: &str) -> Self {
        Self::with_credential(Ok(Some(token.to_owned())))
    }

    /// Credential fetches wait for `gate` to be notified before resolving.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FakeIdentity {
    async fn resolve_session(&self) -> Result<SessionStatus, IdentityError> {
        self.session.lock().unwrap().clone()
    }

    async fn fetch_credential(&self) -> Result<Option<String>, IdentityError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.credential.lock().unwrap().clone()
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        *self.session.lock().unwrap() = Ok(SessionStatus::SignedOut);
        Ok(())
    }
}

pub struct FakeTransport {
    pub sent: Mutex<Vec<OutboundRequest>>,
    response: Result<ApiResponse, ApiError>,
}

impl FakeTransport {
    pub fn ok(body: &str) -> Self {
        Self::responding(Ok(ApiResponse { status: 200, body: body.to_owned() }))
    }

    pub fn responding(response: Result<ApiResponse, ApiError>) -> Self {
        Self { sent: Mutex::new(Vec::new()), response }
    }

    pub fn sent(&self) -> Vec<OutboundRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn dispatch(&self, request: OutboundRequest) -> Result<ApiResponse, ApiError> {
        self.sent.lock().unwrap().push(request);
        self.response.clone()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notes: Mutex<Vec<(ToastLevel, String)>>,
}

impl RecordingNotifier {
    pub fn notes(&self) -> Vec<(ToastLevel, String)> {
        self.notes.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn toast(&self, level: ToastLevel, message: &str) {
        self.notes.lock().unwrap().push((level, message.to_owned()));
    }
}

pub fn client_with(transport: Arc<FakeTransport>) -> ApiClient {
    let config = ClientConfig { base_url: "https://api.test/api".to_owned(), with_credentials: true };
    ApiClient::new(config, transport)
}

pub struct FakeDirectory {
    users: Result<Vec<ChatUser>, ApiError>,
    create_result: Result<(), ApiError>,
    pub created: Mutex<Vec<ChannelRequest>>,
    pub queries: Mutex<Vec<UserQuery>>,
}

impl FakeDirectory {
    pub fn new(users: Result<Vec<ChatUser>, ApiError>, create_result: Result<(), ApiError>) -> Self {
        Self { users, create_result, created: Mutex::new(Vec::new()), queries: Mutex::new(Vec::new()) }
    }
}

#[async_trait(?Send)]
impl ChannelDirectory for FakeDirectory {
    async fn query_users(&self, query: &UserQuery) -> Result<Vec<ChatUser>, ApiError> {
        self.queries.lock().unwrap().push(query.clone());
        self.users.clone()
    }

    async fn create_channel(&self, request: &ChannelRequest) -> Result<(), ApiError> {
        self.created.lock().unwrap().push(request.clone());
        self.create_result.clone()
    }
}

pub fn chat_user(id: &str, name: &str) -> ChatUser {
    ChatUser { id: id.to_owned(), name: Some(name.to_owned()), image: None }
}
