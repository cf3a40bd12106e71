use crate::auth::{use_api, use_auth};
use crate::fetch::{current, use_fetch};
use crate::routes::Route;
use client::{list_state, FetchState};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdStethoscope};
use dioxus_free_icons::Icon;
use shared_types::{demo_doctors, AppError, BookAppointmentRequest, BookingConfirmation, Doctor, FeatureFlags};
use shared_ui::{
    Badge, BadgeVariant, Banner, BannerKind, Button, ButtonVariant, Card, CardContent,
    CardDescription, CardFooter, CardHeader, CardTitle, EmptyState, Input, PageHeader,
    PageSubtitle, PageTitle, SkeletonList, Textarea,
};
use std::collections::HashMap;

/// Directory state for the booking form. With `demo` on, a failed fetch
/// falls back to the fixed demo directory.
pub(crate) fn directory_state(result: Result<Vec<Doctor>, AppError>, demo: bool) -> FetchState<Vec<Doctor>> {
    match result {
        Err(err) if demo => {
            tracing::warn!(error = %err.message, "Doctor directory unavailable, showing demo doctors");
            FetchState::Ready(demo_doctors())
        }
        other => list_state(other),
    }
}

/// The doctor the form will book with: the user's pick while it is still
/// listed, otherwise the first doctor in the directory.
pub(crate) fn effective_doctor(picked: Option<&str>, directory: &[Doctor]) -> Option<String> {
    picked
        .filter(|id| directory.iter().any(|d| d.id == *id))
        .or_else(|| directory.first().map(|d| d.id.as_str()))
        .map(str::to_string)
}

#[component]
fn DoctorOption(doctor: Doctor, selected: bool, on_pick: EventHandler<String>) -> Element {
    let id = doctor.id.clone();

    rsx! {
        button {
            r#type: "button",
            class: "doctor-option",
            "data-selected": if selected { "true" } else { "false" },
            onclick: move |_| on_pick.call(id.clone()),
            span { class: "doctor-avatar",
                Icon::<LdStethoscope> { icon: LdStethoscope, width: 18, height: 18 }
            }
            span { class: "doctor-option-body",
                span { class: "doctor-name", "{doctor.name()}" }
                span { class: "doctor-specialty", "{doctor.specialization_label()}" }
            }
            if let Some(years) = doctor.experience {
                Badge { variant: BadgeVariant::Secondary, "{years} yrs" }
            }
        }
    }
}

/// Consultation booking: pick a doctor and a slot.
#[component]
pub fn BookAppointment() -> Element {
    let api = use_api();
    let auth = use_auth();
    let flags: FeatureFlags = use_context();
    let mut picked = use_signal(|| Option::<String>::None);
    let mut date = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut submitting = use_signal(|| false);
    let mut confirmation = use_signal(|| Option::<BookingConfirmation>::None);

    let doctors = use_fetch({
        let api = api.clone();
        move || {
            let api = api.clone();
            let demo = flags.demo_doctors;
            async move { directory_state(api.doctors().await, demo) }
        }
    });

    let handle_book = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let directory = current(&doctors).ready().cloned().unwrap_or_default();
            let request = BookAppointmentRequest {
                doctor_id: effective_doctor(picked.read().as_deref(), &directory),
                date: date().trim().to_string(),
                notes: notes().trim().to_string(),
            };

            submitting.set(true);
            match api.book_appointment(&auth.user_id(), &request).await {
                Ok(done) => confirmation.set(Some(done)),
                Err(err) if !err.field_errors.is_empty() => field_errors.set(err.field_errors),
                Err(err) => error_msg.set(Some(err.friendly_message())),
            }
            submitting.set(false);
        }
    };

    let field = move |key: &str| field_errors.read().get(key).cloned().unwrap_or_default();

    if let Some(done) = confirmation() {
        let message = if done.message.is_empty() {
            "Your consultation request has been sent.".to_string()
        } else {
            done.message.clone()
        };
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./patient.css") }
            div { class: "booking-done",
                span { class: "booking-done-icon",
                    Icon::<LdCheck> { icon: LdCheck, width: 48, height: 48 }
                }
                h2 { "Appointment requested" }
                p { "{message}" }
                div { class: "booking-done-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            navigator().push(Route::PatientDashboard {});
                        },
                        "Back to dashboard"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            confirmation.set(None);
                            date.set(String::new());
                            notes.set(String::new());
                        },
                        "Book another"
                    }
                }
            }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./patient.css") }

        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Book Appointment" }
                    PageSubtitle { "Choose a specialist and a time that suits you" }
                }
            }

            if let Some(err) = error_msg() {
                Banner { message: err }
            }

            form { class: "booking-form", onsubmit: handle_book,
                Card {
                    CardHeader {
                        div {
                            CardTitle { "Specialist" }
                            CardDescription { "Available doctors" }
                        }
                    }
                    CardContent {
                        match current(&doctors) {
                            FetchState::Loading => rsx! { SkeletonList { rows: 3 } },
                            FetchState::Failed(err) => rsx! {
                                Banner { message: err.friendly_message() }
                            },
                            FetchState::Ready(list) if list.is_empty() => rsx! {
                                EmptyState {
                                    title: "No doctors available",
                                    message: "Please try again later.",
                                }
                            },
                            FetchState::Ready(list) => {
                                let chosen = effective_doctor(picked.read().as_deref(), &list);
                                rsx! {
                                    div { class: "doctor-directory",
                                        for doctor in list {
                                            DoctorOption {
                                                key: "{doctor.id}",
                                                selected: chosen.as_deref() == Some(doctor.id.as_str()),
                                                on_pick: move |id: String| picked.set(Some(id)),
                                                doctor: doctor.clone(),
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        if !field("doctor_id").is_empty() {
                            Banner { kind: BannerKind::Error, message: field("doctor_id") }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "When" }
                    }
                    CardContent {
                        Input {
                            label: "Date and time",
                            input_type: "datetime-local",
                            value: date(),
                            error: field("date"),
                            on_input: move |e: FormEvent| date.set(e.value()),
                        }
                        Textarea {
                            label: "Notes for the doctor",
                            placeholder: "Symptoms, questions, anything useful",
                            rows: 4,
                            value: notes(),
                            on_input: move |e: FormEvent| notes.set(e.value()),
                        }
                    }
                    CardFooter {
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            loading: submitting(),
                            if submitting() { "Booking..." } else { "Confirm booking" }
                        }
                    }
                }
            }
        }
    }
}
