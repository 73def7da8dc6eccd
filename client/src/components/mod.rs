//! UI components shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_provider` and `auth_gate` form the app shell; the rest are widgets
//! rendered by pages.

pub mod auth_gate;
pub mod auth_provider;
pub mod create_channel_modal;
pub mod toaster;
pub mod user_menu;
