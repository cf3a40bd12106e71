use super::{use_doctor_appointments, use_status_update, AppointmentRow};
use crate::auth::use_auth;
use crate::format_helpers::{format_count, format_datetime_human, greeting, now_local};
use crate::routes::visuals::{VisualKind, VisualPanel};
use client::FetchState;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdClock, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{distinct_patients, pending, recent_history, AppointmentFilter, AppointmentStatus};
use shared_ui::{
    Banner, Card, CardContent, CardDescription, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableColumn, DataTableEmpty, DataTableHeader, EmptyState, PageHeader, PageSubtitle,
    PageTitle, SkeletonList, StatCard, StatTone, StatusBadge,
};

/// Closed appointments shown under "Recent history".
const HISTORY_LIMIT: usize = 4;

/// Doctor landing page: today's queue and what was handled last.
#[component]
pub fn DoctorDashboard() -> Element {
    let auth = use_auth();
    let list = use_doctor_appointments();
    let on_status = use_status_update(list);
    let name = auth.identity().map(|i| i.name).unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./doctor.css") }

        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "{greeting(now_local())}, {name}" }
                    PageSubtitle { "Your consultation queue at a glance" }
                }
            }

            match list() {
                FetchState::Loading => rsx! { SkeletonList { rows: 4 } },
                FetchState::Failed(err) => rsx! { Banner { message: err.friendly_message() } },
                FetchState::Ready(appointments) => {
                    let queue = pending(&appointments);
                    let history = recent_history(&appointments, HISTORY_LIMIT);
                    let completed = AppointmentFilter::Only(AppointmentStatus::Completed)
                        .apply(&appointments)
                        .len();
                    let patients = distinct_patients(&appointments).len();

                    rsx! {
                        div { class: "stat-grid",
                            StatCard {
                                label: "Pending",
                                value: format_count(queue.len() as u64),
                                tone: StatTone::Amber,
                                caption: "Awaiting your decision",
                                icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 20, height: 20 } },
                            }
                            StatCard {
                                label: "Completed",
                                value: format_count(completed as u64),
                                tone: StatTone::Green,
                                icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 } },
                            }
                            StatCard {
                                label: "Patients",
                                value: format_count(patients as u64),
                                tone: StatTone::Blue,
                                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
                            }
                        }

                        Card {
                            CardHeader {
                                div {
                                    CardTitle { "Pending queue" }
                                    CardDescription { "Accept to complete, decline to cancel" }
                                }
                            }
                            CardContent {
                                DataTable {
                                    DataTableHeader {
                                        DataTableColumn { "Patient" }
                                        DataTableColumn { "Scheduled" }
                                        DataTableColumn { "Notes" }
                                        DataTableColumn { "Status" }
                                        DataTableColumn { "" }
                                    }
                                    DataTableBody {
                                        if queue.is_empty() {
                                            DataTableEmpty { columns: 5, message: "No pending appointments." }
                                        }
                                        for appointment in queue {
                                            AppointmentRow {
                                                key: "{appointment.id}",
                                                appointment: appointment.clone(),
                                                on_status,
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        div { class: "doctor-split",
                            Card {
                                CardHeader {
                                    CardTitle { "Recent history" }
                                }
                                CardContent {
                                    if history.is_empty() {
                                        EmptyState {
                                            title: "Nothing handled yet",
                                            message: "Completed and cancelled consultations appear here.",
                                        }
                                    }
                                    ul { class: "history-list",
                                        for appointment in history {
                                            li { key: "{appointment.id}", class: "history-item",
                                                div {
                                                    p { class: "history-name", "{appointment.patient_name()}" }
                                                    p { class: "history-date",
                                                        "{format_datetime_human(&appointment.appointment_date)}"
                                                    }
                                                }
                                                StatusBadge { status: appointment.status.clone() }
                                            }
                                        }
                                    }
                                }
                            }
                            VisualPanel {
                                kind: VisualKind::Heartbeat,
                                title: "Live monitor",
                                caption: "Illustrative only",
                            }
                        }
                    }
                }
            }
        }
    }
}
