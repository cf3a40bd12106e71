mod book;
mod dashboard;
mod records;

pub use book::BookAppointment;
pub use dashboard::PatientDashboard;
pub use records::MedicalRecords;

use crate::auth::{use_api, use_auth};
use crate::fetch::use_fetch;
use crate::format_helpers::format_date_human;
use client::{list_state, FetchState};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdExternalLink, LdFileText};
use dioxus_free_icons::Icon;
use shared_types::{Appointment, MedicalRecord};

pub(crate) fn use_patient_appointments() -> Resource<FetchState<Vec<Appointment>>> {
    let api = use_api();
    let auth = use_auth();
    use_fetch(move || {
        let api = api.clone();
        let patient_id = auth.user_id();
        async move { list_state(api.patient_appointments(&patient_id).await) }
    })
}

pub(crate) fn use_medical_records() -> Resource<FetchState<Vec<MedicalRecord>>> {
    let api = use_api();
    let auth = use_auth();
    use_fetch(move || {
        let api = api.clone();
        let patient_id = auth.user_id();
        async move { list_state(api.medical_records(&patient_id).await) }
    })
}

/// One document on the medical timeline.
#[component]
pub(crate) fn RecordItem(record: MedicalRecord) -> Element {
    let uploaded = record
        .uploaded_at
        .as_deref()
        .map(format_date_human)
        .unwrap_or_default();

    rsx! {
        li { class: "record-item",
            span { class: "record-icon",
                Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
            }
            div { class: "record-meta",
                p { class: "record-title", "{record.title()}" }
                if !uploaded.is_empty() {
                    p { class: "record-date", "{uploaded}" }
                }
            }
            if !record.file_url.is_empty() {
                a {
                    class: "record-link",
                    href: "{record.file_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "aria-label": "Open document",
                    Icon::<LdExternalLink> { icon: LdExternalLink, width: 16, height: 16 }
                }
            }
        }
    }
}
