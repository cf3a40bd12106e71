use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BannerKind {
    #[default]
    Error,
    Success,
    Info,
}

impl BannerKind {
    fn class(&self) -> &'static str {
        match self {
            BannerKind::Error => "error",
            BannerKind::Success => "success",
            BannerKind::Info => "info",
        }
    }
}

/// Inline message strip for request failures and confirmations.
#[component]
pub fn Banner(#[props(default)] kind: BannerKind, message: String) -> Element {
    let role = if kind == BannerKind::Error { "alert" } else { "status" };
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "banner", "data-kind": kind.class(), role: role, "{message}" }
    }
}

/// Centered note for a list with nothing in it.
#[component]
pub fn EmptyState(title: String, #[props(default)] message: String) -> Element {
    rsx! {
        div { class: "empty-state",
            p { class: "empty-state-title", "{title}" }
            if !message.is_empty() {
                p { class: "empty-state-message", "{message}" }
            }
        }
    }
}
