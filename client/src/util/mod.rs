//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` maps the auth state and current path to a gate decision.

pub mod auth;
