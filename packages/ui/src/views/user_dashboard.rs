use api::models::date::display_date;
use api::{ApiClient, ApiError, Project, WorkloadSummary};
use dioxus::prelude::*;

use crate::{use_api, use_feedback, ActivityLogPanel, DashboardHeader, Spinner};

/// Employee console: assigned projects and the workload summary of one.
#[component]
pub fn UserDashboardView(on_signed_out: EventHandler<()>) -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let mut projects = use_signal(Vec::<Project>::new);
    let mut details = use_signal(|| Option::<(Project, WorkloadSummary)>::None);
    let mut loading = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let client = api.peek().clone();
        match client.my_projects().await {
            Ok(list) => projects.set(list),
            Err(e) => feedback.api_error(&e, "Failed to load projects"),
        }
    });

    let view_details = move |project_id: String| {
        if loading() {
            return;
        }
        spawn(async move {
            loading.set(true);
            match load_details(&api(), &project_id).await {
                Ok(found) => details.set(Some(found)),
                Err(e) => feedback.api_error(&e, "Failed to load project details"),
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "dashboard",

            DashboardHeader {
                title: "User Dashboard",
                busy: loading(),
                on_signed_out: move |_| on_signed_out.call(()),
            }

            section {
                class: "panel",
                h2 { "Assigned Projects" }
                if projects.read().is_empty() {
                    p { class: "muted", "No projects assigned yet." }
                } else {
                    ul {
                        class: "project-list",
                        for project in projects() {
                            ProjectItem {
                                key: "{project.id}",
                                project: project.clone(),
                                disabled: loading(),
                                on_view: view_details,
                            }
                        }
                    }
                }
                if loading() {
                    Spinner {}
                }
            }

            if let Some((project, summary)) = details() {
                ProjectDetails { project, summary }
            }

            ActivityLogPanel {}
        }
    }
}

#[component]
fn ProjectItem(project: Project, disabled: bool, on_view: EventHandler<String>) -> Element {
    let project_id = project.id.clone();

    rsx! {
        li {
            span { "{project.name}" }
            button {
                class: "btn btn-primary btn-sm",
                disabled: disabled,
                onclick: move |_| on_view.call(project_id.clone()),
                "View Details"
            }
        }
    }
}

fn details_heading(project_name: &str) -> String {
    format!("Project Details: {project_name}")
}

async fn load_details(
    client: &ApiClient,
    project_id: &str,
) -> Result<(Project, WorkloadSummary), ApiError> {
    let project = client.my_project(project_id).await?;
    let summary = client.workload_summary(project_id).await?;
    Ok((project, summary))
}

#[component]
fn ProjectDetails(project: Project, summary: WorkloadSummary) -> Element {
    rsx! {
        section {
            class: "panel project-details",
            h2 { {details_heading(&project.name)} }
            p { "{project.description}" }
            dl {
                dt { "Start" }
                dd { {display_date(&project.start_date)} }
                dt { "End" }
                dd { {display_date(&project.end_date)} }
            }

            h3 { "Workload Summary" }
            ul {
                class: "summary",
                li { "Total Allocation: {summary.total_alloc}%" }
                li { "Remaining Availability: {summary.availability}%" }
                li { "Duration: {summary.duration} days" }
            }
        }
    }
}
