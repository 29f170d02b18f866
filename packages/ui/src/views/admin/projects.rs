use api::models::date::display_date;
use api::{Project, ProjectDraft, ResourceAssignment, User};
use dioxus::prelude::*;

use super::documents::DocumentPanel;
use super::resources::ResourcePanel;
use super::{refresh_projects, refresh_resources, today};
use crate::{use_api, use_feedback, Spinner};

#[component]
pub(super) fn ProjectsTab(
    users: Signal<Vec<User>>,
    projects: Signal<Vec<Project>>,
    loading: Signal<bool>,
) -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let mut loading = loading;
    let mut draft = use_signal(|| ProjectDraft::starting(today()));
    let mut selected = use_signal(|| Option::<Project>::None);
    let mut resources = use_signal(Vec::<ResourceAssignment>::new);

    let add_project = move |_| {
        if loading() {
            return;
        }
        let new_project = match draft.peek().validate() {
            Ok(project) => project,
            Err(e) => {
                feedback.error(e.to_string());
                return;
            }
        };
        spawn(async move {
            loading.set(true);
            let client = api();
            match client.create_project(&new_project).await {
                Ok(()) => {
                    feedback.success("Project added successfully!");
                    draft.set(ProjectDraft::starting(today()));
                    refresh_projects(&client, projects, feedback).await;
                }
                Err(e) => feedback.api_error(&e, "Failed to add project"),
            }
            loading.set(false);
        });
    };

    let select_project = move |project: Project| {
        let project_id = project.id.clone();
        selected.set(Some(project));
        resources.set(Vec::new());
        spawn(async move {
            refresh_resources(&api(), &project_id, resources, feedback).await;
        });
    };

    rsx! {
        section {
            class: "panel",
            h2 { "Projects" }

            div {
                class: "form-grid",
                input {
                    placeholder: "Project Name",
                    disabled: loading(),
                    value: draft().name,
                    oninput: move |evt| draft.write().name = evt.value(),
                }
                input {
                    placeholder: "Description",
                    disabled: loading(),
                    value: draft().description,
                    oninput: move |evt| draft.write().description = evt.value(),
                }
                label {
                    class: "field",
                    span { "Start" }
                    input {
                        r#type: "date",
                        disabled: loading(),
                        value: draft().start_date,
                        oninput: move |evt| draft.write().start_date = evt.value(),
                    }
                }
                label {
                    class: "field",
                    span { "End" }
                    input {
                        r#type: "date",
                        disabled: loading(),
                        min: draft().start_date,
                        value: draft().end_date,
                        oninput: move |evt| draft.write().end_date = evt.value(),
                    }
                }
                button {
                    class: "btn btn-success",
                    disabled: loading(),
                    onclick: add_project,
                    if loading() {
                        Spinner {}
                        "Adding..."
                    } else {
                        "Add Project"
                    }
                }
            }

            div {
                class: "table-wrap",
                table {
                    thead {
                        tr {
                            th { "Name" }
                            th { "Description" }
                            th { "Start" }
                            th { "End" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for project in projects() {
                            ProjectRow {
                                key: "{project.id}",
                                project: project.clone(),
                                on_select: select_project,
                            }
                        }
                        if projects.read().is_empty() {
                            tr {
                                td { class: "empty-row", colspan: "5", "No projects yet" }
                            }
                        }
                    }
                }
            }
        }

        if let Some(project) = selected() {
            ResourcePanel {
                project: project.clone(),
                users,
                resources,
                loading,
                on_close: move |_| {
                    selected.set(None);
                    resources.set(Vec::new());
                },
            }
            DocumentPanel { project: project.clone(), selected, projects, loading }
        }
    }
}

#[component]
fn ProjectRow(project: Project, on_select: EventHandler<Project>) -> Element {
    let target = project.clone();

    rsx! {
        tr {
            td { "{project.name}" }
            td { "{project.description}" }
            td { {display_date(&project.start_date)} }
            td { {display_date(&project.end_date)} }
            td {
                button {
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| on_select.call(target.clone()),
                    "View Resources"
                }
            }
        }
    }
}
