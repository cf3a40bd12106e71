use crate::auth::{use_api, use_auth};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{RegisterRequest, Role, BLOOD_GROUPS};
use shared_ui::{
    Banner, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, FormSelect, Input,
};
use std::collections::HashMap;

/// Roles that may sign themselves up.
const SELF_SERVICE_ROLES: &[Role] = &[Role::Patient, Role::Doctor];

/// Assemble the request from raw form values. Blank optional fields become `None`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn build_request(
    name: &str,
    email: &str,
    password: &str,
    role: Role,
    specialization: &str,
    experience: &str,
    dob: &str,
    blood_group: &str,
) -> RegisterRequest {
    let non_empty = |s: &str| Some(s.trim().to_string()).filter(|s| !s.is_empty());
    RegisterRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
        role,
        specialization: non_empty(specialization),
        experience: experience.trim().parse().ok(),
        dob: non_empty(dob),
        blood_group: non_empty(blood_group),
    }
    .normalized()
}

/// Account creation for patients and doctors. Success signs the user in.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Patient);
    let mut specialization = use_signal(String::new);
    let mut experience = use_signal(String::new);
    let mut dob = use_signal(String::new);
    let mut blood_group = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    if let Some(existing) = auth.role() {
        navigator().replace(Route::home(existing));
    }

    let handle_register = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let request = build_request(
                &name(),
                &email(),
                &password(),
                role(),
                &specialization(),
                &experience(),
                &dob(),
                &blood_group(),
            );
            match api.register(&request).await.and_then(|resp| auth.accept(resp)) {
                Ok(landing) => {
                    navigator().push(Route::home(landing));
                }
                Err(err) if !err.field_errors.is_empty() => field_errors.set(err.field_errors),
                Err(err) => {
                    tracing::warn!(kind = %err.kind, "Registration failed");
                    error_msg.set(Some(err.friendly_message()));
                }
            }
            loading.set(false);
        }
    };

    let field = move |key: &str| field_errors.read().get(key).cloned().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card auth-card-wide",
                CardHeader {
                    div {
                        CardTitle { "Create your account" }
                        CardDescription { "Join MedVault as a patient or a doctor" }
                    }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        Banner { message: err }
                    }

                    form { class: "auth-form", onsubmit: handle_register,
                        div { class: "role-picker", role: "radiogroup",
                            for option in SELF_SERVICE_ROLES.iter().copied() {
                                button {
                                    key: "{option.as_str()}",
                                    r#type: "button",
                                    class: "role-option",
                                    "data-active": if role() == option { "true" } else { "false" },
                                    onclick: move |_| role.set(option),
                                    "{option.display_name()}"
                                }
                            }
                        }
                        if !field("role").is_empty() {
                            p { class: "field-error", "{field(\"role\")}" }
                        }

                        Input {
                            label: "Full name",
                            placeholder: "Jane Roe",
                            required: true,
                            value: name(),
                            error: field("name"),
                            on_input: move |e: FormEvent| name.set(e.value()),
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@example.com",
                            required: true,
                            value: email(),
                            error: field("email"),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            placeholder: "At least 6 characters",
                            required: true,
                            value: password(),
                            error: field("password"),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }

                        if role() == Role::Doctor {
                            div { class: "auth-row",
                                Input {
                                    label: "Specialization",
                                    placeholder: "Cardiology",
                                    required: true,
                                    value: specialization(),
                                    error: field("specialization"),
                                    on_input: move |e: FormEvent| specialization.set(e.value()),
                                }
                                Input {
                                    label: "Years of experience",
                                    input_type: "number",
                                    placeholder: "5",
                                    value: experience(),
                                    on_input: move |e: FormEvent| experience.set(e.value()),
                                }
                            }
                        } else {
                            div { class: "auth-row",
                                Input {
                                    label: "Date of birth",
                                    input_type: "date",
                                    value: dob(),
                                    error: field("dob"),
                                    on_input: move |e: FormEvent| dob.set(e.value()),
                                }
                                FormSelect {
                                    label: "Blood group",
                                    value: blood_group(),
                                    error: field("blood_group"),
                                    onchange: move |e: FormEvent| blood_group.set(e.value()),
                                    option { value: "", "Select" }
                                    for group in BLOOD_GROUPS.iter() {
                                        option { key: "{group}", value: "{group}", "{group}" }
                                    }
                                }
                            }
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            loading: loading(),
                            class: "auth-submit",
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already registered? "
                        Link { to: Route::Login {}, "Sign in" }
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

    #[test]
    fn patient_form_drops_doctor_fields() {
        let req = build_request(
            " Jane Roe ", "jane@example.com", "secret1", Role::Patient,
            "Cardiology", "7", "1990-05-01", "O+",
        );
        assert_eq!(req.name, "Jane Roe");
        assert_eq!(req.specialization, None);
        assert_eq!(req.experience, None);
        assert_eq!(req.dob.as_deref(), Some("1990-05-01"));
        assert_eq!(req.blood_group.as_deref(), Some("O+"));
    }

    #[test]
    fn doctor_form_parses_experience() {
        let req = build_request(
            "Sam", "sam@clinic.test", "secret1", Role::Doctor,
            "Neurology", " 12 ", "", "",
        );
        assert_eq!(req.experience, Some(12));
        assert_eq!(req.specialization.as_deref(), Some("Neurology"));
        assert_eq!(req.dob, None);
    }

    #[test]
    fn blank_experience_is_omitted() {
        let req = build_request("Sam", "s@c.test", "secret1", Role::Doctor, "X", "", "", "");
        assert_eq!(req.experience, None);
    }
}
