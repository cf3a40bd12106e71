use super::use_doctor_appointments;
use crate::format_helpers::{age_label, format_date_human, now_local};
use crate::routes::visuals::{VisualKind, VisualPanel};
use client::FetchState;
use dioxus::prelude::*;
use shared_types::{distinct_patients, Appointment, Patient};
use shared_ui::{
    Badge, BadgeVariant, Banner, Card, CardContent, CardDescription, CardHeader, CardTitle,
    EmptyState, PageHeader, PageSubtitle, PageTitle, SkeletonList,
};

/// Number of appointments each patient has with this doctor.
pub(crate) fn visit_count(appointments: &[Appointment], patient_id: &str) -> usize {
    appointments
        .iter()
        .filter(|a| a.patient.as_ref().is_some_and(|p| p.id == patient_id))
        .count()
}

#[component]
fn PatientCard(patient: Patient, visits: usize) -> Element {
    let age = age_label(patient.age_on(now_local().date()));
    let dob = patient.dob.as_deref().map(format_date_human).unwrap_or_default();
    let blood = patient.blood_group.clone().unwrap_or_else(|| "\u{2014}".to_string());

    rsx! {
        Card { class: "patient-card",
            CardHeader {
                span { class: "patient-avatar", "{shared_types::initial_of(patient.name())}" }
                div {
                    CardTitle { "{patient.name()}" }
                    if !dob.is_empty() {
                        CardDescription { "Born {dob}" }
                    }
                }
            }
            CardContent {
                dl { class: "vitals-list",
                    dt { "Age" }
                    dd { "{age}" }
                    dt { "Blood group" }
                    dd { Badge { variant: BadgeVariant::Destructive, "{blood}" } }
                    dt { "Visits" }
                    dd { "{visits}" }
                }
            }
        }
    }
}

/// Patients this doctor has seen or will see.
#[component]
pub fn DoctorVitals() -> Element {
    let list = use_doctor_appointments();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./doctor.css") }

        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Patient Vitals" }
                    PageSubtitle { "Everyone on your books" }
                }
            }

            VisualPanel {
                kind: VisualKind::Anatomy,
                title: "Body map",
                caption: "Illustrative only",
            }

            match list() {
                FetchState::Loading => rsx! { SkeletonList { rows: 3 } },
                FetchState::Failed(err) => rsx! { Banner { message: err.friendly_message() } },
                FetchState::Ready(appointments) => {
                    let patients = distinct_patients(&appointments);
                    rsx! {
                        if patients.is_empty() {
                            EmptyState {
                                title: "No patients yet",
                                message: "Patients appear here once they book with you.",
                            }
                        }
                        div { class: "patient-grid",
                            for patient in patients {
                                PatientCard {
                                    key: "{patient.id}",
                                    visits: visit_count(&appointments, &patient.id),
                                    patient: patient.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn visit(id: &str, patient: &str) -> Appointment {
        Appointment {
            id: id.into(),
            patient: Some(Patient {
                id: patient.into(),
                ..Patient::default()
            }),
            ..Appointment::default()
        }
    }

    #[test]
    fn visits_count_per_patient() {
        let list = vec![visit("a1", "p1"), visit("a2", "p2"), visit("a3", "p1"), Appointment::default()];
        assert_eq!(visit_count(&list, "p1"), 2);
        assert_eq!(visit_count(&list, "p2"), 1);
        assert_eq!(visit_count(&list, "p9"), 0);
    }
}
