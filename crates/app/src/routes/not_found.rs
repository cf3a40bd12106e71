use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Unmatched path outside every role area.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let auth = use_auth();
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "No route matched");

    let (target, label) = match auth.role() {
        Some(role) => (Route::home(role), "Back to your dashboard"),
        None => (Route::Landing {}, "Back to the home page"),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "The page "
                    code { "{path}" }
                    " could not be found."
                }
                Link { to: target, class: "not-found-link", "{label}" }
            }
        }
    }
}
