//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the shared REST client and its interceptor chain, `token` attaches
//! bearer credentials to it, `identity` abstracts the identity provider,
//! `channels` talks to the chat directory, and `types` defines the wire schema.

pub mod api;
pub mod channels;
pub mod identity;
pub mod token;
pub mod transport;
pub mod types;
