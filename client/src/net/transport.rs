//! Wire transport behind [`crate::net::api::ApiClient`].
//!
//! In the browser (`csr`) requests go out through `gloo-net`; tests plug in
//! in-memory transports.

use async_trait::async_trait;

use crate::net::api::{ApiError, ApiResponse, OutboundRequest};

#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Put `request` on the wire and collect the full response.
    async fn dispatch(&self, request: OutboundRequest) -> Result<ApiResponse, ApiError>;
}

/// Fetch-API transport.
#[cfg(feature = "csr")]
pub struct GlooTransport {
    with_credentials: bool,
}

#[cfg(feature = "csr")]
impl GlooTransport {
    pub fn new(with_credentials: bool) -> Self {
        Self { with_credentials }
    }
}

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn dispatch(&self, request: OutboundRequest) -> Result<ApiResponse, ApiError> {
        use crate::net::api::Method;
        use gloo_net::http::Request;

        let url = request.url.as_str();
        let mut builder = match request.method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if self.with_credentials {
            builder = builder.credentials(web_sys::RequestCredentials::Include);
        }
        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = prepared.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}
