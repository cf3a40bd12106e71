use dioxus::prelude::*;

/// Accent colour of a stat card's icon chip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatTone {
    #[default]
    Blue,
    Green,
    Purple,
    Amber,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Blue => "blue",
            StatTone::Green => "green",
            StatTone::Purple => "purple",
            StatTone::Amber => "amber",
        }
    }
}

/// Headline number with a label, an icon and an optional caption.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] tone: StatTone,
    #[props(default)] caption: String,
    icon: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card", "data-tone": tone.class(),
            div { class: "stat-card-icon", {icon} }
            StatCardBody { label, value, caption }
        }
    }
}

#[component]
fn StatCardBody(label: String, value: String, #[props(default)] caption: String) -> Element {
    rsx! {
        div { class: "stat-card-body",
            p { class: "stat-card-label", "{label}" }
            p { class: "stat-card-value", "{value}" }
            if !caption.is_empty() {
                p { class: "stat-card-caption", "{caption}" }
            }
        }
    }
}
