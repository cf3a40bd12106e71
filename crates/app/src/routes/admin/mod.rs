mod overview;
mod stats;
mod users;

pub use overview::AdminDashboard;
pub use stats::AdminStats;
pub use users::AdminUsers;

use crate::auth::use_api;
use crate::fetch::use_fetch;
use crate::format_helpers::format_count;
use client::FetchState;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdStethoscope, LdUser, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{DashboardStats, Role};
use shared_ui::{StatCard, StatTone};

/// `GET /admin/stats` as a fetch resource.
pub(crate) fn use_admin_stats() -> Resource<FetchState<DashboardStats>> {
    let api = use_api();
    use_fetch(move || {
        let api = api.clone();
        async move { FetchState::from(api.admin_stats().await) }
    })
}

/// The four headline counters.
#[component]
pub(crate) fn StatGrid(stats: DashboardStats) -> Element {
    rsx! {
        div { class: "stat-grid",
            StatCard {
                label: "Total Users",
                value: format_count(stats.users),
                tone: StatTone::Blue,
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
            }
            StatCard {
                label: "Doctors",
                value: format_count(stats.doctors),
                tone: StatTone::Green,
                icon: rsx! { Icon::<LdStethoscope> { icon: LdStethoscope, width: 20, height: 20 } },
            }
            StatCard {
                label: "Patients",
                value: format_count(stats.patients),
                tone: StatTone::Purple,
                icon: rsx! { Icon::<LdUser> { icon: LdUser, width: 20, height: 20 } },
            }
            StatCard {
                label: "Appointments",
                value: format_count(stats.appointments),
                tone: StatTone::Amber,
                icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 } },
            }
        }
    }
}

fn share_class(role: Role) -> &'static str {
    match role {
        Role::Doctor => "share-bar share-doctor",
        Role::Patient => "share-bar share-patient",
        Role::Admin => "share-bar share-admin",
    }
}

/// Horizontal bars for users per role.
#[component]
pub(crate) fn RoleBreakdown(stats: DashboardStats) -> Element {
    let shares = stats.role_breakdown();

    rsx! {
        ul { class: "role-breakdown",
            for share in shares {
                li { key: "{share.role.as_str()}", class: "role-share",
                    div { class: "role-share-label",
                        span { "{share.role.display_name()}" }
                        span { class: "role-share-count",
                            "{format_count(share.count)} \u{b7} {share.percent}%"
                        }
                    }
                    div { class: "share-track",
                        div {
                            class: share_class(share.role),
                            style: "width: {share.percent}%",
                        }
                    }
                }
            }
        }
    }
}
