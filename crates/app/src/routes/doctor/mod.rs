mod appointments;
mod dashboard;
mod vitals;

pub use appointments::DoctorAppointments;
pub use dashboard::DoctorDashboard;
pub use vitals::DoctorVitals;

use crate::auth::{use_api, use_auth};
use crate::format_helpers::{age_label, format_datetime_human, now_local};
use client::{list_state, FetchState};
use dioxus::prelude::*;
use shared_types::{with_status, Appointment, AppointmentStatus};
use shared_ui::{use_toast, Button, ButtonVariant, DataTableCell, DataTableRow, StatusBadge, ToastOptions};

/// The signed-in doctor's appointments.
///
/// Held in a signal rather than a bare resource so a confirmed status
/// change can be applied in place without refetching.
pub(crate) fn use_doctor_appointments() -> Signal<FetchState<Vec<Appointment>>> {
    let api = use_api();
    let auth = use_auth();
    let mut list = use_signal(FetchState::<Vec<Appointment>>::default);

    use_resource(move || {
        let api = api.clone();
        let doctor_id = auth.user_id();
        async move {
            list.set(list_state(api.doctor_appointments(&doctor_id).await));
        }
    });

    list
}

/// `(appointment id, new status)` handler. The list only changes once the
/// backend has accepted the update.
pub(crate) fn use_status_update(
    mut list: Signal<FetchState<Vec<Appointment>>>,
) -> Callback<(String, AppointmentStatus)> {
    let api = use_api();
    let toast = use_toast();

    use_callback(move |(id, status): (String, AppointmentStatus)| {
        let api = api.clone();
        spawn(async move {
            match api.update_appointment_status(&id, status, None).await {
                Ok(()) => {
                    let next = (*list.peek())
                        .clone()
                        .map(|items| with_status(&items, &id, status));
                    list.set(next);
                    let verb = match status {
                        AppointmentStatus::Completed => "accepted",
                        AppointmentStatus::Cancelled => "declined",
                        AppointmentStatus::Pending => "reopened",
                    };
                    toast.success(format!("Appointment {verb}"), ToastOptions::new());
                }
                Err(err) => {
                    toast.error(err.friendly_message(), ToastOptions::new());
                }
            }
        });
    })
}

/// Patient age for a row, from the date of birth when known.
pub(crate) fn patient_age(appointment: &Appointment) -> String {
    let today = now_local().date();
    age_label(appointment.patient.as_ref().and_then(|p| p.age_on(today)))
}

/// One appointment as a table row. Pending rows carry accept and decline.
#[component]
pub(crate) fn AppointmentRow(
    appointment: Appointment,
    on_status: Callback<(String, AppointmentStatus)>,
) -> Element {
    let id = appointment.id.clone();
    let notes = appointment.notes.clone().unwrap_or_default();

    rsx! {
        DataTableRow {
            DataTableCell {
                div { class: "patient-cell",
                    span { class: "patient-name", "{appointment.patient_name()}" }
                    span { class: "patient-age", "{patient_age(&appointment)}" }
                }
            }
            DataTableCell { "{format_datetime_human(&appointment.appointment_date)}" }
            DataTableCell {
                span { class: "notes-cell", "{notes}" }
            }
            DataTableCell {
                StatusBadge { status: appointment.status.clone() }
            }
            DataTableCell {
                if appointment.is_pending() {
                    div { class: "row-actions",
                        Button {
                            variant: ButtonVariant::Success,
                            onclick: {
                                let id = id.clone();
                                move |_| on_status.call((id.clone(), AppointmentStatus::Completed))
                            },
                            "Accept"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_status.call((id.clone(), AppointmentStatus::Cancelled)),
                            "Decline"
                        }
                    }
                }
            }
        }
    }
}
