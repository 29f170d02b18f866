//! User-facing notifications.
//!
//! Every message goes three ways: a toast from `dioxus-primitives`, a
//! `tracing` event, and an entry in the activity log when one is provided.
//! API failures also update the auth state, so a rejected session sends the
//! route guard back to the login page.

use std::time::Duration;

use api::ApiError;
use dioxus::prelude::*;

use crate::activity_log::{log_activity, ActivityLog, LogLevel};
use crate::auth::{use_auth, AuthState};
use crate::components::{use_toast, ToastOptions, Toasts};

/// How long toasts stay up. Provided at the app root from the client config;
/// `0` keeps them until dismissed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastSettings {
    pub duration_secs: u32,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self { duration_secs: 4 }
    }
}

impl ToastSettings {
    pub fn new(duration_secs: u32) -> Self {
        Self { duration_secs }
    }

    fn options(&self) -> ToastOptions {
        match self.duration_secs {
            0 => ToastOptions::new().permanent(true),
            secs => ToastOptions::new().duration(Duration::from_secs(u64::from(secs))),
        }
    }
}

/// Toasts plus session bookkeeping, the one place API failures end up.
#[derive(Clone, Copy)]
pub struct Feedback {
    toasts: Toasts,
    auth: Signal<AuthState>,
    settings: ToastSettings,
}

pub fn use_feedback() -> Feedback {
    Feedback {
        toasts: use_toast(),
        auth: use_auth(),
        settings: try_consume_context::<ToastSettings>().unwrap_or_default(),
    }
}

impl Feedback {
    pub fn notify(&self, level: LogLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            LogLevel::Error | LogLevel::Warning => tracing::warn!("{message}"),
            LogLevel::Success | LogLevel::Info => tracing::info!("{message}"),
        }
        if let Some(mut log) = try_consume_context::<Signal<ActivityLog>>() {
            log_activity(&mut log, level, &message);
        }

        let options = self.settings.options();
        match level {
            LogLevel::Success => self.toasts.success(message, options),
            LogLevel::Info => self.toasts.info(message, options),
            LogLevel::Warning => self.toasts.warning(message, options),
            LogLevel::Error => self.toasts.error(message, options),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(LogLevel::Success, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(LogLevel::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(LogLevel::Error, message);
    }

    /// Report a failed call with the server's message or `fallback`.
    pub fn api_error(&self, err: &ApiError, fallback: &str) {
        let current = *self.auth.peek();
        let next = current.after_failure(err);
        if next != current {
            let mut auth = self.auth;
            auth.set(next);
        }
        let fallback = if err.is_unauthorized() {
            "Session expired, please sign in again"
        } else {
            fallback
        };
        self.error(err.user_message(fallback));
    }
}
