use super::{use_medical_records, use_patient_appointments, RecordItem};
use crate::auth::use_auth;
use crate::fetch::current;
use crate::format_helpers::{format_date_human, format_datetime_human, format_time, greeting, now_local};
use crate::routes::visuals::{VisualKind, VisualPanel};
use crate::routes::Route;
use client::FetchState;
use dioxus::prelude::*;
use shared_types::{distinct_doctors, next_upcoming, pending, Appointment};
use shared_ui::{
    Banner, Button, ButtonVariant, Card, CardAction, CardContent, CardDescription, CardHeader,
    CardTitle, CardTone, EmptyState, PageActions, PageHeader, PageSubtitle, PageTitle,
    SkeletonList, StatusBadge,
};

#[component]
fn UpcomingCard(appointment: Appointment) -> Element {
    let doctor = appointment.doctor.clone().unwrap_or_default();

    rsx! {
        Card { tone: CardTone::Accent, class: "upcoming-card",
            CardHeader {
                div {
                    CardDescription { "Next consultation" }
                    CardTitle { "{appointment.doctor_name()}" }
                }
                CardAction {
                    StatusBadge { status: appointment.status.clone() }
                }
            }
            CardContent {
                p { class: "upcoming-specialty", "{doctor.specialization_label()}" }
                p { class: "upcoming-when",
                    "{format_date_human(&appointment.appointment_date)}"
                    span { class: "upcoming-time", " {format_time(&appointment.appointment_date)}" }
                }
            }
        }
    }
}

/// Patient landing page.
#[component]
pub fn PatientDashboard() -> Element {
    let auth = use_auth();
    let appointments = use_patient_appointments();
    let records = use_medical_records();
    let name = auth.identity().map(|i| i.name).unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./patient.css") }

        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "{greeting(now_local())}, {name}" }
                    PageSubtitle { "Your health at a glance" }
                }
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            navigator().push(Route::BookAppointment {});
                        },
                        "Book appointment"
                    }
                }
            }

            match current(&appointments) {
                FetchState::Loading => rsx! { SkeletonList { rows: 3 } },
                FetchState::Failed(err) => rsx! { Banner { message: err.friendly_message() } },
                FetchState::Ready(list) => {
                    let upcoming = next_upcoming(&list).cloned();
                    let feed = pending(&list);
                    let doctors = distinct_doctors(&list);
                    rsx! {
                        div { class: "patient-split",
                            if let Some(appointment) = upcoming {
                                UpcomingCard { appointment }
                            } else {
                                Card { tone: CardTone::Muted,
                                    CardContent {
                                        EmptyState {
                                            title: "No upcoming consultation",
                                            message: "Book one with a specialist whenever you need it.",
                                        }
                                    }
                                }
                            }
                            VisualPanel {
                                kind: VisualKind::Heartbeat,
                                title: "Heart rate",
                                caption: "Illustrative only",
                            }
                        }

                        div { class: "patient-split",
                            Card {
                                CardHeader {
                                    CardTitle { "Pending requests" }
                                }
                                CardContent {
                                    if feed.is_empty() {
                                        p { class: "muted", "No pending requests." }
                                    }
                                    ul { class: "feed-list",
                                        for appointment in feed {
                                            li { key: "{appointment.id}", class: "feed-item",
                                                div {
                                                    p { class: "feed-title", "{appointment.doctor_name()}" }
                                                    p { class: "feed-date",
                                                        "{format_datetime_human(&appointment.appointment_date)}"
                                                    }
                                                }
                                                StatusBadge { status: appointment.status.clone() }
                                            }
                                        }
                                    }
                                }
                            }
                            Card {
                                CardHeader {
                                    CardTitle { "Your doctors" }
                                }
                                CardContent {
                                    if doctors.is_empty() {
                                        p { class: "muted", "You have not seen a doctor yet." }
                                    }
                                    ul { class: "doctor-list",
                                        for doctor in doctors {
                                            li { key: "{doctor.id}", class: "doctor-item",
                                                span { class: "doctor-avatar",
                                                    "{shared_types::initial_of(doctor.name())}"
                                                }
                                                div {
                                                    p { class: "doctor-name", "{doctor.name()}" }
                                                    p { class: "doctor-specialty", "{doctor.specialization_label()}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    div {
                        CardTitle { "Medical timeline" }
                        CardDescription { "Documents shared with your care team" }
                    }
                    CardAction {
                        Link { to: Route::MedicalRecords {}, class: "card-link", "View all" }
                    }
                }
                CardContent {
                    match current(&records) {
                        FetchState::Loading => rsx! { SkeletonList { rows: 2 } },
                        FetchState::Failed(err) => rsx! { Banner { message: err.friendly_message() } },
                        FetchState::Ready(list) if list.is_empty() => rsx! {
                            p { class: "muted", "No records uploaded yet." }
                        },
                        FetchState::Ready(list) => rsx! {
                            ul { class: "record-list",
                                for record in list {
                                    RecordItem { key: "{record.id}", record: record.clone() }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
