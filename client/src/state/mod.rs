//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `channel_form`, `toast`) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod channel_form;
pub mod toast;
