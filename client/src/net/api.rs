//! Shared REST client with a request-interceptor chain.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every outbound API call goes through [`ApiClient::send`]. Registered
//! interceptors run in registration order and may mutate the request (the
//! token pipeline adds `Authorization` here) before the [`Transport`] puts it
//! on the wire.
//!
//! ERROR HANDLING
//! ==============
//! Interceptor rejections, transport failures and non-2xx responses all come
//! back as [`ApiError`]; they are logged once here and handed to the caller
//! unchanged.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::net::transport::Transport;

/// Failure of an API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid request body: {0}")]
    Encode(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A request on its way out. Header names are stored lowercased.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl OutboundRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: BTreeMap::new(), body: None }
    }

    /// Set a header, replacing any existing value under the same name.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// Attach a JSON body and matching content type.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let encoded = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.set_header("content-type", "application/json");
        self.body = Some(encoded);
        Ok(self)
    }
}

/// A response that made it back from the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Hook run against every request before dispatch.
#[async_trait(?Send)]
pub trait RequestInterceptor: Send + Sync {
    /// Inspect or mutate `request`. Returning an error aborts the request.
    async fn intercept(&self, request: &mut OutboundRequest) -> Result<(), ApiError>;
}

/// Handle identifying one interceptor registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InterceptorId(u64);

type Registration = (InterceptorId, Arc<dyn RequestInterceptor>);

struct ClientInner {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    interceptors: Mutex<Vec<Registration>>,
    next_id: AtomicU64,
}

/// Cloneable handle to the shared API client.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                config,
                transport,
                interceptors: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    fn registrations(&self) -> std::sync::MutexGuard<'_, Vec<Registration>> {
        self.inner.interceptors.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add `interceptor` to the chain and return its handle.
    pub fn register_request_interceptor(&self, interceptor: Arc<dyn RequestInterceptor>) -> InterceptorId {
        let id = InterceptorId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.registrations().push((id, interceptor));
        id
    }

    /// Remove the interceptor registered under `id`.
    /// Returns `false` if it was already released.
    pub fn release_interceptor(&self, id: InterceptorId) -> bool {
        let mut registrations = self.registrations();
        let before = registrations.len();
        registrations.retain(|(registered, _)| *registered != id);
        registrations.len() != before
    }

    pub fn interceptor_count(&self) -> usize {
        self.registrations().len()
    }

    /// Absolute URL for an API path. Absolute URLs pass through untouched.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        format!("{}/{}", self.inner.config.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    pub fn request(&self, method: Method, path: &str) -> OutboundRequest {
        OutboundRequest::new(method, self.endpoint(path))
    }

    /// Run the interceptor chain, then dispatch.
    ///
    /// # Errors
    ///
    /// Returns the first interceptor rejection, the transport error, or
    /// [`ApiError::Status`] for a non-2xx response.
    pub async fn send(&self, mut request: OutboundRequest) -> Result<ApiResponse, ApiError> {
        // Snapshot so the lock is never held across an await.
        let chain: Vec<Arc<dyn RequestInterceptor>> =
            self.registrations().iter().map(|(_, interceptor)| interceptor.clone()).collect();

        for interceptor in chain {
            if let Err(e) = interceptor.intercept(&mut request).await {
                leptos::logging::error!("API request error: {e}");
                return Err(e);
            }
        }

        let method = request.method;
        let url = request.url.clone();
        let resp = self.inner.transport.dispatch(request).await.inspect_err(|e| {
            leptos::logging::error!("API request error: {} {url}: {e}", method.as_str());
        })?;
        if !resp.is_success() {
            leptos::logging::warn!("API {} {url} returned {}", method.as_str(), resp.status);
            return Err(ApiError::Status { status: resp.status, body: resp.body });
        }
        Ok(resp)
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]; also fails with [`ApiError::Decode`].
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::Get, path)).await?.json()
    }

    /// `POST` a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]; also fails with [`ApiError::Encode`] or
    /// [`ApiError::Decode`].
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::Post, path).with_json(body)?;
        self.send(request).await?.json()
    }
}
