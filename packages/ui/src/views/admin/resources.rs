use api::{Project, ResourceAssignment, ResourceDraft, User};
use dioxus::prelude::*;

use super::refresh_resources;
use crate::{use_api, use_feedback, Spinner};

/// Assignment form and table for the selected project.
#[component]
pub(super) fn ResourcePanel(
    project: Project,
    users: Signal<Vec<User>>,
    resources: Signal<Vec<ResourceAssignment>>,
    loading: Signal<bool>,
    on_close: EventHandler<()>,
) -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let mut loading = loading;
    let mut draft = use_signal(ResourceDraft::default);

    let project_id = project.id.clone();
    let project_name = project.name.clone();

    let assign = move |_| {
        if loading() {
            return;
        }
        let resource = match draft.peek().validate() {
            Ok(resource) => resource,
            Err(e) => {
                feedback.error(e.to_string());
                return;
            }
        };
        let project_id = project_id.clone();
        let project_name = project_name.clone();
        spawn(async move {
            loading.set(true);
            let client = api();
            match client.assign_resource(&project_id, &resource).await {
                Ok(()) => {
                    feedback.success(format!(
                        "Resource assigned to {project_name} successfully!"
                    ));
                    draft.set(ResourceDraft::default());
                    refresh_resources(&client, &project_id, resources, feedback).await;
                }
                Err(e) => feedback.api_error(&e, "Failed to assign resource"),
            }
            loading.set(false);
        });
    };

    rsx! {
        section {
            class: "panel",
            div {
                class: "panel-header",
                h2 { "Resources for {project.name}" }
                button {
                    class: "btn btn-secondary btn-sm",
                    onclick: move |_| on_close.call(()),
                    "Back to Projects"
                }
            }

            div {
                class: "form-grid",
                select {
                    disabled: loading(),
                    value: draft().user_id,
                    onchange: move |evt| draft.write().user_id = evt.value(),
                    option { value: "", "Select User" }
                    for user in users() {
                        option { key: "{user.id}", value: "{user.id}", "{user.name}" }
                    }
                }
                input {
                    placeholder: "Designation",
                    disabled: loading(),
                    value: draft().designation,
                    oninput: move |evt| draft.write().designation = evt.value(),
                }
                input {
                    placeholder: "Allocation %",
                    r#type: "number",
                    min: "0",
                    max: "100",
                    disabled: loading(),
                    value: draft().allocation_percentage,
                    oninput: move |evt| draft.write().allocation_percentage = evt.value(),
                }
                button {
                    class: "btn btn-success",
                    disabled: loading(),
                    onclick: assign,
                    if loading() {
                        Spinner {}
                        "Assigning..."
                    } else {
                        "Assign Resource"
                    }
                }
            }

            div {
                class: "table-wrap",
                table {
                    thead {
                        tr {
                            th { "User" }
                            th { "Designation" }
                            th { "Allocation" }
                        }
                    }
                    tbody {
                        for assignment in resources() {
                            tr {
                                key: "{assignment.id}",
                                td { {assignment.user_display()} }
                                td { "{assignment.designation}" }
                                td { "{assignment.allocation_percentage}%" }
                            }
                        }
                        if resources.read().is_empty() {
                            tr {
                                td { class: "empty-row", colspan: "3", "No resources assigned yet" }
                            }
                        }
                    }
                }
            }
        }
    }
}
