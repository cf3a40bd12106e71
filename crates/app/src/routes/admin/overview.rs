use super::{use_admin_stats, RoleBreakdown, StatGrid};
use crate::auth::use_auth;
use crate::fetch::current;
use crate::format_helpers::{greeting, now_local};
use crate::routes::visuals::{VisualKind, VisualPanel};
use crate::routes::Route;
use client::FetchState;
use dioxus::prelude::*;
use shared_ui::{
    Banner, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    PageActions, PageHeader, PageSubtitle, PageTitle, SkeletonList,
};

/// Administrator landing page.
#[component]
pub fn AdminDashboard() -> Element {
    let auth = use_auth();
    let stats = use_admin_stats();
    let name = auth.identity().map(|i| i.name).unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "{greeting(now_local())}, {name}" }
                    PageSubtitle { "Here is how the clinic is doing today." }
                }
                PageActions {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            navigator().push(Route::AdminUsers {});
                        },
                        "Manage users"
                    }
                }
            }

            match current(&stats) {
                FetchState::Loading => rsx! { SkeletonList { rows: 2 } },
                FetchState::Failed(err) => rsx! { Banner { message: err.friendly_message() } },
                FetchState::Ready(stats) => rsx! {
                    StatGrid { stats: stats.clone() }
                    div { class: "admin-split",
                        Card {
                            CardHeader {
                                div {
                                    CardTitle { "User distribution" }
                                    CardDescription { "Accounts per role" }
                                }
                            }
                            CardContent {
                                RoleBreakdown { stats }
                            }
                        }
                        VisualPanel {
                            kind: VisualKind::Trend,
                            title: "Weekly activity",
                            caption: "Illustrative only",
                        }
                    }
                },
            }
        }
    }
}
