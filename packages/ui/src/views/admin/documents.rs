use api::forms::{check_document, DOCUMENT_ACCEPT};
use api::models::document_file_name;
use api::{DocumentUpload, Project};
use dioxus::prelude::*;

use crate::{use_api, use_feedback};
use crate::icons::FaFileLines;
use crate::{Icon, Spinner};

/// Link text for the document at position `index` (0-based).
pub(crate) fn document_label(index: usize, url: &str) -> String {
    format!("Document {} ({})", index + 1, document_file_name(url))
}

pub(crate) fn upload_heading(project_name: &str) -> String {
    format!("Upload Document for {project_name}")
}

/// Upload form and document list for the selected project.
///
/// The file input is re-mounted after every attempt (a one-item keyed list
/// whose key changes) so the browser forgets the previous selection.
#[component]
pub(super) fn DocumentPanel(
    project: Project,
    selected: Signal<Option<Project>>,
    projects: Signal<Vec<Project>>,
    loading: Signal<bool>,
) -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let mut loading = loading;
    let mut selected = selected;
    let mut projects = projects;
    let mut input_key = use_signal(|| 0u32);

    let on_upload = move |evt: FormEvent| async move {
        let Some(project) = selected.peek().clone() else {
            return;
        };
        let Some(file) = evt.files().into_iter().next() else {
            feedback.warning("Please select a file");
            return;
        };
        let file_name = file.name();
        if let Err(e) = check_document(&file_name, file.size()) {
            feedback.error(e.to_string());
            *input_key.write() += 1;
            return;
        }

        loading.set(true);
        let bytes = match file.read_bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                tracing::warn!("could not read {file_name}: {e}");
                feedback.error("Upload failed");
                loading.set(false);
                *input_key.write() += 1;
                return;
            }
        };
        let result = match DocumentUpload::new(file_name, file.content_type(), bytes) {
            Ok(upload) => api().upload_document(&project.id, upload).await,
            Err(e) => Err(e.into()),
        };
        loading.set(false);
        *input_key.write() += 1;

        match result {
            Ok(updated) => {
                if let Some(entry) = projects.write().iter_mut().find(|p| p.id == updated.id) {
                    *entry = updated.clone();
                }
                selected.set(Some(updated));
                feedback.success(format!("Document uploaded to {}!", project.name));
            }
            Err(e) => feedback.api_error(&e, "Upload failed"),
        }
    };

    rsx! {
        section {
            class: "panel",
            h2 { {upload_heading(&project.name)} }

            div {
                class: "upload-row",
                for generation in [input_key()] {
                    input {
                        key: "{generation}",
                        r#type: "file",
                        accept: DOCUMENT_ACCEPT,
                        disabled: loading(),
                        onchange: on_upload,
                    }
                }
                if loading() {
                    Spinner {}
                }
                button {
                    class: "btn btn-secondary btn-sm",
                    disabled: loading(),
                    onclick: move |_| *input_key.write() += 1,
                    "Clear"
                }
            }

            h3 { "Documents" }
            if project.documents.is_empty() {
                p { class: "muted", "No documents uploaded yet." }
            } else {
                ul {
                    class: "document-list",
                    for (index, url) in project.documents.iter().enumerate() {
                        li {
                            key: "{url}",
                            a {
                                href: "{url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                Icon { icon: FaFileLines, width: 14, height: 14 }
                                {document_label(index, url)}
                            }
                        }
                    }
                }
            }
        }
    }
}
