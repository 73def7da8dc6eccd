//! # client
//!
//! Leptos + WASM frontend for Chatter, a team-chat client. Messaging, calls
//! and sessions are hosted by external services; this crate owns the auth
//! gate in front of the pages, the token-attaching API client, and the
//! channel-creation flow.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use std::sync::Arc;

    use leptos::prelude::*;

    use crate::app::App;
    use crate::net::api::ApiClient;
    use crate::net::identity::{IdentityProvider, SessionIdentity};
    use crate::net::transport::GlooTransport;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::ClientConfig::from_build_env();
    log::info!("chatter client using API at {}", config.base_url);

    let identity: Arc<dyn IdentityProvider> = Arc::new(SessionIdentity::new(config.base_url.clone()));
    let client = ApiClient::new(config.clone(), Arc::new(GlooTransport::new(config.with_credentials)));

    leptos::mount::mount_to_body(move || view! { <App identity client/> });
}
