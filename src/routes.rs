//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat backend is a placeholder: a greeting at `/` and a liveness probe
//! at `/healthz`. CORS follows `CLIENT_ORIGIN` so the browser client can send
//! its session cookie when one is configured.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Router;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub fn app(config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .layer(cors_layer(config.client_origin.clone()))
        .layer(TraceLayer::new_for_http())
}

/// Credentialed CORS for a known origin, otherwise open without credentials.
fn cors_layer(origin: Option<HeaderValue>) -> CorsLayer {
    match origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    }
}

async fn root() -> &'static str {
    "Hello World!"
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
