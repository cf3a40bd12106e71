use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Destructive,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Colour for an appointment status string. Unknown statuses stay neutral.
pub fn status_variant(status: &str) -> BadgeVariant {
    match status.trim().to_ascii_uppercase().as_str() {
        "PENDING" => BadgeVariant::Warning,
        "COMPLETED" => BadgeVariant::Success,
        "CANCELLED" => BadgeVariant::Destructive,
        _ => BadgeVariant::Outline,
    }
}

/// Inline pill for labels and statuses.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Badge showing an appointment status in its conventional colour.
#[component]
pub fn StatusBadge(status: String) -> Element {
    rsx! {
        Badge { variant: status_variant(&status), "{status}" }
    }
}
