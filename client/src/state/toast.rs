//! Transient user notifications.
//!
//! DESIGN
//! ======
//! Anything that needs to tell the user something non-blocking goes through
//! [`Notifier`]; the app backs it with a `RwSignal<ToastState>` rendered by
//! the `Toaster` component.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::{RwSignal, Update};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Queue of visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, level, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn toast(&self, level: ToastLevel, message: &str);
}

impl Notifier for RwSignal<ToastState> {
    fn toast(&self, level: ToastLevel, message: &str) {
        // The signal may already be disposed if the app unmounted mid-request.
        let _ = self.try_update(|state| state.push(level, message));
    }
}
