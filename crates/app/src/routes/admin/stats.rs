use super::{use_admin_stats, RoleBreakdown, StatGrid};
use crate::auth::use_api;
use crate::fetch::current;
use crate::format_helpers::format_count;
use crate::routes::visuals::{VisualKind, VisualPanel};
use client::FetchState;
use dioxus::prelude::*;
use shared_types::DashboardStats;
use shared_ui::{
    Badge, BadgeVariant, Banner, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, PageActions, PageHeader, PageSubtitle, PageTitle, SkeletonList,
};

/// Appointments per registered patient, one decimal place. "0.0" with no patients.
pub(crate) fn appointments_per_patient(stats: &DashboardStats) -> String {
    if stats.patients == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", stats.appointments as f64 / stats.patients as f64)
}

/// Patients per doctor, rounded down. Zero with no doctors.
pub(crate) fn patients_per_doctor(stats: &DashboardStats) -> u64 {
    stats.patients.checked_div(stats.doctors).unwrap_or(0)
}

/// System health: backend reachability plus the derived ratios.
#[component]
pub fn AdminStats() -> Element {
    let api = use_api();
    let mut stats = use_admin_stats();
    let state = current(&stats);
    let refreshing = state.is_loading();

    let (badge, label) = match &state {
        FetchState::Loading => (BadgeVariant::Secondary, "Checking"),
        FetchState::Ready(_) => (BadgeVariant::Success, "Online"),
        FetchState::Failed(_) => (BadgeVariant::Destructive, "Unreachable"),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "System Health" }
                    PageSubtitle { "Backend status and population metrics" }
                }
                PageActions {
                    Button {
                        variant: ButtonVariant::Outline,
                        loading: refreshing,
                        onclick: move |_| stats.restart(),
                        "Refresh"
                    }
                }
            }

            Card {
                CardHeader {
                    div {
                        CardTitle { "API" }
                        CardDescription { "{api.base_url()}" }
                    }
                    Badge { variant: badge, "{label}" }
                }
            }

            match state {
                FetchState::Loading => rsx! { SkeletonList { rows: 3 } },
                FetchState::Failed(err) => rsx! { Banner { message: err.friendly_message() } },
                FetchState::Ready(stats) => rsx! {
                    StatGrid { stats: stats.clone() }
                    div { class: "admin-split",
                        Card {
                            CardHeader {
                                CardTitle { "Ratios" }
                            }
                            CardContent {
                                dl { class: "ratio-list",
                                    dt { "Appointments per patient" }
                                    dd { "{appointments_per_patient(&stats)}" }
                                    dt { "Patients per doctor" }
                                    dd { "{format_count(patients_per_doctor(&stats))}" }
                                }
                            }
                        }
                        Card {
                            CardHeader {
                                CardTitle { "Role distribution" }
                            }
                            CardContent {
                                RoleBreakdown { stats: stats.clone() }
                            }
                        }
                    }
                    VisualPanel {
                        kind: VisualKind::Heartbeat,
                        title: "Service pulse",
                    }
                },
            }
        }
    }
}
