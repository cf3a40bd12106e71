//! Decorative panels. They carry no data and only render when the
//! `visualizations` flag is on.

use dioxus::prelude::*;
use shared_types::FeatureFlags;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, CardTone};

/// Which decoration a panel draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualKind {
    Anatomy,
    Heartbeat,
    Trend,
}

impl VisualKind {
    fn class(&self) -> &'static str {
        match self {
            VisualKind::Anatomy => "visual-anatomy",
            VisualKind::Heartbeat => "visual-heartbeat",
            VisualKind::Trend => "visual-trend",
        }
    }

    /// Fixed bar heights for the static trend sketch, in percent.
    fn bars(&self) -> &'static [u8] {
        match self {
            VisualKind::Trend => &[35, 52, 48, 70, 64, 82, 76],
            VisualKind::Heartbeat => &[20, 20, 85, 10, 45, 20, 20],
            VisualKind::Anatomy => &[],
        }
    }
}

#[component]
pub fn VisualPanel(kind: VisualKind, title: String, #[props(default)] caption: String) -> Element {
    let flags: FeatureFlags = use_context();
    if !flags.visualizations {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./visuals.css") }

        Card { tone: CardTone::Muted, class: "visual-panel",
            CardHeader {
                div {
                    CardTitle { "{title}" }
                    if !caption.is_empty() {
                        CardDescription { "{caption}" }
                    }
                }
            }
            CardContent {
                div { class: "visual-canvas {kind.class()}", "aria-hidden": "true",
                    if kind.bars().is_empty() {
                        div { class: "visual-silhouette" }
                    } else {
                        for (i, height) in kind.bars().iter().enumerate() {
                            span {
                                key: "{i}",
                                class: "visual-bar",
                                style: "height: {height}%",
                            }
                        }
                    }
                }
            }
        }
    }
}
