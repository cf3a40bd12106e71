use super::{use_medical_records, RecordItem};
use crate::auth::{use_api, use_auth};
use crate::fetch::current;
use client::FetchState;
use dioxus::prelude::*;
use shared_types::UploadRecordRequest;
use shared_ui::{
    use_toast, Banner, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, EmptyState, Input, PageActions, PageHeader, PageSubtitle, PageTitle,
    SkeletonList, ToastOptions,
};
use std::collections::HashMap;

/// Register a document by link. Metadata only; the file itself lives
/// wherever the link points.
#[component]
fn UploadForm(on_uploaded: EventHandler<()>) -> Element {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();
    let mut file_url = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut uploading = use_signal(|| false);

    let handle_upload = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            field_errors.set(HashMap::new());
            error_msg.set(None);
            uploading.set(true);

            let request = UploadRecordRequest {
                file_url: file_url().trim().to_string(),
                description: description().trim().to_string(),
            };
            match api.upload_record(&auth.user_id(), &request).await {
                Ok(record) => {
                    tracing::info!(record_id = %record.id, "Medical record registered");
                    file_url.set(String::new());
                    description.set(String::new());
                    toast.success("Record uploaded".to_string(), ToastOptions::new());
                    on_uploaded.call(());
                }
                Err(err) if !err.field_errors.is_empty() => field_errors.set(err.field_errors),
                Err(err) => error_msg.set(Some(err.friendly_message())),
            }
            uploading.set(false);
        }
    };

    let field = move |key: &str| field_errors.read().get(key).cloned().unwrap_or_default();

    rsx! {
        Card { class: "upload-card",
            CardHeader {
                div {
                    CardTitle { "Add a record" }
                    CardDescription { "Link a report, scan or prescription" }
                }
            }
            form { onsubmit: handle_upload,
                CardContent {
                    if let Some(err) = error_msg() {
                        Banner { message: err }
                    }
                    Input {
                        label: "Document link",
                        input_type: "url",
                        placeholder: "https://",
                        value: file_url(),
                        error: field("file_url"),
                        on_input: move |e: FormEvent| file_url.set(e.value()),
                    }
                    Input {
                        label: "Description",
                        placeholder: "Blood test, March",
                        value: description(),
                        error: field("description"),
                        on_input: move |e: FormEvent| description.set(e.value()),
                    }
                }
                CardFooter {
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit",
                        loading: uploading(),
                        if uploading() { "Uploading..." } else { "Upload" }
                    }
                }
            }
        }
    }
}

/// The patient's documents plus the upload form.
#[component]
pub fn MedicalRecords() -> Element {
    let mut records = use_medical_records();
    let mut show_upload = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./patient.css") }

        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Medical Records" }
                    PageSubtitle { "Everything your care team can see" }
                }
                PageActions {
                    Button {
                        variant: if show_upload() { ButtonVariant::Outline } else { ButtonVariant::Primary },
                        onclick: move |_| show_upload.set(!show_upload()),
                        if show_upload() { "Close" } else { "Upload record" }
                    }
                }
            }

            if show_upload() {
                UploadForm {
                    on_uploaded: move |_| {
                        show_upload.set(false);
                        records.restart();
                    },
                }
            }

            match current(&records) {
                FetchState::Loading => rsx! { SkeletonList { rows: 4 } },
                FetchState::Failed(err) => rsx! { Banner { message: err.friendly_message() } },
                FetchState::Ready(list) if list.is_empty() => rsx! {
                    EmptyState {
                        title: "No records yet",
                        message: "Upload your first document to start your timeline.",
                    }
                },
                FetchState::Ready(list) => rsx! {
                    Card {
                        CardContent {
                            ul { class: "record-list",
                                for record in list {
                                    RecordItem { key: "{record.id}", record: record.clone() }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
