//! Admin console: employee management and project management tabs.
//!
//! The dashboard owns the user and project lists so both tabs see the same
//! data (the resource form offers the loaded users). A single `loading` flag
//! is shared by every form: while one request is in flight all inputs and
//! buttons are disabled.

mod documents;
mod employees;
mod projects;
mod resources;

use api::{ApiClient, Project, ResourceAssignment, User};
use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::{use_api, use_feedback, ActivityLogPanel, DashboardHeader, Feedback};

use employees::EmployeesTab;
use projects::ProjectsTab;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Employees,
    Projects,
}

impl AdminTab {
    pub const ALL: [AdminTab; 2] = [AdminTab::Employees, AdminTab::Projects];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Employees => "Employees Management",
            AdminTab::Projects => "Project Management",
        }
    }
}

#[component]
pub fn AdminDashboardView(on_signed_out: EventHandler<()>) -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let mut tab = use_signal(AdminTab::default);
    let users = use_signal(Vec::<User>::new);
    let projects = use_signal(Vec::<Project>::new);
    let loading = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let client = api.peek().clone();
        refresh_users(&client, users, feedback).await;
        refresh_projects(&client, projects, feedback).await;
    });

    rsx! {
        div {
            class: "dashboard",

            DashboardHeader {
                title: "Admin Dashboard",
                busy: loading(),
                on_signed_out: move |_| on_signed_out.call(()),
            }

            nav {
                class: "tabs",
                for t in AdminTab::ALL {
                    button {
                        key: "{t:?}",
                        class: if tab() == t { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(t),
                        {t.label()}
                    }
                }
            }

            {
                match tab() {
                    AdminTab::Employees => rsx! {
                        EmployeesTab { users, loading }
                    },
                    AdminTab::Projects => rsx! {
                        ProjectsTab { users, projects, loading }
                    },
                }
            }

            ActivityLogPanel {}
        }
    }
}

pub(crate) async fn refresh_users(
    client: &ApiClient,
    mut users: Signal<Vec<User>>,
    feedback: Feedback,
) {
    match client.list_users().await {
        Ok(list) => users.set(list),
        Err(e) => feedback.api_error(&e, "Failed to load users"),
    }
}

pub(crate) async fn refresh_projects(
    client: &ApiClient,
    mut projects: Signal<Vec<Project>>,
    feedback: Feedback,
) {
    match client.list_projects().await {
        Ok(list) => projects.set(list),
        Err(e) => feedback.api_error(&e, "Failed to load projects"),
    }
}

pub(crate) async fn refresh_resources(
    client: &ApiClient,
    project_id: &str,
    mut resources: Signal<Vec<ResourceAssignment>>,
    feedback: Feedback,
) {
    match client.project_resources(project_id).await {
        Ok(list) => resources.set(list),
        Err(e) => feedback.api_error(&e, "Failed to load resources"),
    }
}

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs() {
        assert_eq!(AdminTab::default(), AdminTab::Employees);
        assert_eq!(AdminTab::Projects.label(), "Project Management");
    }
}
