use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, LogEntry};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

/// Floating panel listing past notifications. Hidden until toggled.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log.read().visible {
        return rsx! {};
    }

    let shown = log.read().shown();
    let problems_only = log.read().problems_only;
    let total = log.read().entries.len();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        div {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Activity ({total})" }
                div {
                    class: "activity-log-header-actions",
                    button {
                        class: if problems_only { "active" } else { "" },
                        onclick: move |_| log.write().problems_only = !problems_only,
                        "Problems only"
                    }
                    button {
                        onclick: move |_| log.write().entries.clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            div {
                class: "activity-log-entries",
                if shown.is_empty() {
                    div { class: "activity-log-empty", "Nothing yet." }
                }
                for (idx, entry) in shown.into_iter().enumerate() {
                    LogLine { key: "{idx}", entry }
                }
            }
        }
    }
}

#[component]
fn LogLine(entry: LogEntry) -> Element {
    rsx! {
        div {
            class: entry.level.class(),
            span { class: "activity-log-time", "{entry.timestamp}" }
            span { class: "activity-log-level", {entry.level.label()} }
            span { "{entry.message}" }
        }
    }
}

/// Header button that opens the panel. Turns red once an error was logged.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let count = log.read().entries.len();
    let errors = log.read().error_count();

    rsx! {
        button {
            class: if errors > 0 { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            title: "Activity log",
            onclick: move |_| {
                let visible = log.peek().visible;
                log.write().visible = !visible;
            },
            if errors > 0 {
                "{errors} errors"
            } else if count > 0 {
                "Log ({count})"
            } else {
                "Log"
            }
        }
    }
}
