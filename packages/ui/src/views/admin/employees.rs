use api::{Role, User, UserDraft};
use dioxus::prelude::*;

use super::refresh_users;
use crate::{use_api, use_feedback};
use crate::views::ConfirmDialog;
use crate::Spinner;

#[component]
pub(super) fn EmployeesTab(users: Signal<Vec<User>>, loading: Signal<bool>) -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let mut loading = loading;
    let mut draft = use_signal(UserDraft::default);
    let mut pending_delete = use_signal(|| Option::<User>::None);

    let add_user = move |_| {
        if loading() {
            return;
        }
        let new_user = match draft.peek().validate() {
            Ok(user) => user,
            Err(e) => {
                feedback.error(e.to_string());
                return;
            }
        };
        spawn(async move {
            loading.set(true);
            let client = api();
            match client.create_user(&new_user).await {
                Ok(()) => {
                    feedback.success("User added successfully!");
                    draft.set(UserDraft::default());
                    refresh_users(&client, users, feedback).await;
                }
                Err(e) => feedback.api_error(&e, "Failed to add user"),
            }
            loading.set(false);
        });
    };

    let confirm_delete = move |_| {
        let Some(user) = pending_delete.write().take() else {
            return;
        };
        spawn(async move {
            loading.set(true);
            let client = api();
            match client.delete_user(&user.id).await {
                Ok(()) => {
                    feedback.success("User deleted successfully!");
                    refresh_users(&client, users, feedback).await;
                }
                Err(e) => feedback.api_error(&e, "Failed to delete user"),
            }
            loading.set(false);
        });
    };

    rsx! {
        section {
            class: "panel",
            h2 { "Employees" }

            div {
                class: "form-grid",
                input {
                    placeholder: "Name",
                    disabled: loading(),
                    value: draft().name,
                    oninput: move |evt| draft.write().name = evt.value(),
                }
                input {
                    placeholder: "Email",
                    r#type: "email",
                    disabled: loading(),
                    value: draft().email,
                    oninput: move |evt| draft.write().email = evt.value(),
                }
                input {
                    placeholder: "Password",
                    r#type: "password",
                    disabled: loading(),
                    value: draft().password,
                    oninput: move |evt| draft.write().password = evt.value(),
                }
                select {
                    disabled: loading(),
                    value: draft().role.as_str(),
                    onchange: move |evt| draft.write().role = Role::parse(&evt.value()),
                    option { value: "user", "User" }
                    option { value: "admin", "Admin" }
                }
                button {
                    class: "btn btn-success",
                    disabled: loading(),
                    onclick: add_user,
                    if loading() {
                        Spinner {}
                        "Adding..."
                    } else {
                        "Add User"
                    }
                }
            }

            div {
                class: "table-wrap",
                table {
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for user in users() {
                            UserRow {
                                key: "{user.id}",
                                user: user.clone(),
                                disabled: loading(),
                                on_delete: move |user| pending_delete.set(Some(user)),
                            }
                        }
                        if users.read().is_empty() {
                            tr {
                                td { class: "empty-row", colspan: "4", "No employees yet" }
                            }
                        }
                    }
                }
            }

            if pending_delete.read().is_some() {
                ConfirmDialog {
                    message: "Are you sure you want to delete this user?",
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User, disabled: bool, on_delete: EventHandler<User>) -> Element {
    let target = user.clone();

    rsx! {
        tr {
            td { "{user.name}" }
            td { "{user.email}" }
            td { "{user.role}" }
            td {
                button {
                    class: "btn btn-danger btn-sm",
                    disabled: disabled,
                    onclick: move |_| on_delete.call(target.clone()),
                    "Delete"
                }
            }
        }
    }
}
