//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{load_config, make_client};

pub mod views;

pub const CONSOLE_CSS: Asset = asset!("/assets/console.css");

mod navbar;
pub use navbar::DashboardHeader;

mod auth;
pub use auth::{use_api, use_auth, AuthProvider, AuthState, LogoutButton};

pub mod components;

mod feedback;
pub use feedback::{use_feedback, Feedback, ToastSettings};

mod spinner;
pub use spinner::Spinner;

pub mod activity_log;
pub use activity_log::{ActivityLog, LogLevel, log_activity, use_activity_log};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
