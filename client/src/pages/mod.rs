//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are selected by `AuthGate`, never mounted directly by the router.

pub mod auth;
pub mod call;
pub mod home;
pub mod loading;
