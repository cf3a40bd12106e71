use super::{use_doctor_appointments, use_status_update, AppointmentRow};
use client::FetchState;
use dioxus::prelude::*;
use shared_types::{AppointmentFilter, ALL_FILTERS};
use shared_ui::{
    Banner, Card, CardContent, DataTable, DataTableBody, DataTableColumn, DataTableEmpty,
    DataTableHeader, PageHeader, PageSubtitle, PageTitle, SkeletonList,
};

/// Every appointment assigned to the doctor, filterable by status.
#[component]
pub fn DoctorAppointments() -> Element {
    let list = use_doctor_appointments();
    let on_status = use_status_update(list);
    let mut filter = use_signal(AppointmentFilter::default);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./doctor.css") }

        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Appointments" }
                    PageSubtitle { "All consultations booked with you" }
                }
            }

            div { class: "filter-chips", role: "tablist",
                for option in ALL_FILTERS.iter().copied() {
                    button {
                        key: "{option.label()}",
                        r#type: "button",
                        class: "filter-chip",
                        role: "tab",
                        "aria-selected": if filter() == option { "true" } else { "false" },
                        onclick: move |_| filter.set(option),
                        "{option.label()}"
                    }
                }
            }

            match list() {
                FetchState::Loading => rsx! { SkeletonList { rows: 5 } },
                FetchState::Failed(err) => rsx! { Banner { message: err.friendly_message() } },
                FetchState::Ready(appointments) => {
                    let visible = filter().apply(&appointments);
                    rsx! {
                        Card {
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
                                        if visible.is_empty() {
                                            DataTableEmpty { columns: 5, message: "No appointments match this filter." }
                                        }
                                        for appointment in visible {
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
                    }
                }
            }
        }
    }
}
