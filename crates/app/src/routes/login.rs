use crate::auth::{use_api, use_auth};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{AppError, AppErrorKind, LoginRequest};
use shared_ui::{
    Banner, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Input,
};
use std::collections::HashMap;

/// Banner text for a failed sign-in. Rejected credentials get one fixed
/// sentence so the page never reveals which half was wrong.
pub(crate) fn login_failure_message(err: &AppError) -> String {
    match err.kind {
        AppErrorKind::Unauthorized
        | AppErrorKind::Forbidden
        | AppErrorKind::BadRequest
        | AppErrorKind::NotFound => "Invalid credentials. Please try again.".to_string(),
        _ => err.friendly_message(),
    }
}

/// Email and password sign-in. Success lands on the role's dashboard.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Already signed in: skip the form.
    if let Some(role) = auth.role() {
        navigator().replace(Route::home(role));
    }

    let handle_login = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let request = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            match api.login(&request).await.and_then(|resp| auth.accept(resp)) {
                Ok(role) => {
                    navigator().push(Route::home(role));
                }
                Err(err) if !err.field_errors.is_empty() => field_errors.set(err.field_errors),
                Err(err) => {
                    tracing::warn!(kind = %err.kind, "Sign-in failed");
                    error_msg.set(Some(login_failure_message(&err)));
                }
            }
            loading.set(false);
        }
    };

    let field = move |name: &str| field_errors.read().get(name).cloned().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    div {
                        CardTitle { "Welcome back" }
                        CardDescription { "Sign in to your MedVault account" }
                    }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        Banner { message: err }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            error: field("email"),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            error: field("password"),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            loading: loading(),
                            class: "auth-submit",
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "New to MedVault? "
                        Link { to: Route::Register {}, "Create an account" }
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
    fn rejected_credentials_get_fixed_message() {
        let err = AppError::from_status(401, r#"{"message":"Bad credentials"}"#);
        assert_eq!(login_failure_message(&err), "Invalid credentials. Please try again.");
        let err = AppError::from_status(400, "");
        assert_eq!(login_failure_message(&err), "Invalid credentials. Please try again.");
    }

    #[test]
    fn outages_are_not_blamed_on_the_user() {
        let err = AppError::transport("connection refused");
        assert!(login_failure_message(&err).contains("Could not reach the server"));
    }
}
