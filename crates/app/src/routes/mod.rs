pub mod admin;
pub mod doctor;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod patient;
pub mod register;
pub mod visuals;

use std::str::FromStr;

use crate::auth::use_auth;
use client::{decide, Access, GuardOutcome};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdCalendar, LdFileText, LdHeartPulse, LdLayoutDashboard, LdLogOut, LdMenu,
    LdMoon, LdSun, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{menu_for, role_for_path, MenuIcon, Role};
use shared_ui::theme::ThemeState;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, NavRail, NavRailFooter, NavRailHeader,
    NavRailInset, NavRailItem, NavRailMenu, NavRailProvider, NavRailToggle,
};

use admin::{AdminDashboard, AdminStats, AdminUsers};
use doctor::{DoctorAppointments, DoctorDashboard, DoctorVitals};
use landing::Landing;
use login::Login;
use not_found::NotFound;
use patient::{BookAppointment, MedicalRecords, PatientDashboard};
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    // ── Admin ──
    #[route("/admin/dashboard")]
    AdminDashboard {},
    #[route("/admin/users")]
    AdminUsers {},
    #[route("/admin/stats")]
    AdminStats {},
    #[route("/admin/:..rest")]
    AdminFallback { rest: Vec<String> },
    // ── Doctor ──
    #[route("/doctor/dashboard")]
    DoctorDashboard {},
    #[route("/doctor/appointments")]
    DoctorAppointments {},
    #[route("/doctor/vitals")]
    DoctorVitals {},
    #[route("/doctor/:..rest")]
    DoctorFallback { rest: Vec<String> },
    // ── Patient ──
    #[route("/patient/dashboard")]
    PatientDashboard {},
    #[route("/patient/book")]
    BookAppointment {},
    #[route("/patient/records")]
    MedicalRecords {},
    #[route("/patient/:..rest")]
    PatientFallback { rest: Vec<String> },
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Dashboard a role lands on after sign-in.
    pub fn home(role: Role) -> Route {
        match role {
            Role::Admin => Route::AdminDashboard {},
            Role::Doctor => Route::DoctorDashboard {},
            Role::Patient => Route::PatientDashboard {},
        }
    }

    /// What the session must satisfy to see this route. Everything under a
    /// role prefix belongs to that role; the rest is public.
    pub fn access(&self) -> Access {
        match role_for_path(&self.to_string()) {
            Some(role) => Access::Role(role),
            None => Access::Public,
        }
    }
}

/// Gate for every role area.
///
/// Shows a placeholder until the session is resolved, then either renders
/// the outlet or redirects: anonymous users to `/login`, users of another
/// role to their own dashboard.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    match decide(&auth.session(), route.access()) {
        GuardOutcome::Loading => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
        GuardOutcome::Render(_) => rsx! { Outlet::<Route> {} },
        GuardOutcome::RedirectToLogin => {
            tracing::debug!(path = %route, "Anonymous visit to protected route");
            navigator().replace(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        GuardOutcome::RedirectHome(role) => {
            tracing::debug!(path = %route, role = role.as_str(), "Route belongs to another role");
            navigator().replace(Route::home(role));
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

fn menu_icon(icon: MenuIcon) -> Element {
    match icon {
        MenuIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        MenuIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        MenuIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        MenuIcon::Activity => rsx! { Icon::<LdActivity> { icon: LdActivity, width: 18, height: 18 } },
        MenuIcon::FileText => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
    }
}

/// Role-area shell: nav rail built from the role's menu plus the page outlet.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let mut theme: ThemeState = use_context();

    let Some(identity) = auth.identity() else {
        return rsx! {};
    };
    let current_path = route.to_string();
    let menu = menu_for(identity.role);
    let page_title = menu
        .iter()
        .find(|item| item.path == current_path)
        .map(|item| item.label)
        .unwrap_or("MedVault");
    let dark = theme.palette.read().is_dark();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        NavRailProvider {
            NavRail {
                NavRailHeader {
                    span { class: "brand-mark",
                        Icon::<LdHeartPulse> { icon: LdHeartPulse, width: 22, height: 22 }
                    }
                    span { class: "nav-rail-label brand-name", "MedVault" }
                }

                NavRailMenu {
                    for item in menu.iter() {
                        NavRailItem {
                            key: "{item.path}",
                            active: item.path == current_path,
                            onclick: move |_| {
                                if let Ok(target) = Route::from_str(item.path) {
                                    navigator().push(target);
                                }
                            },
                            {menu_icon(item.icon)}
                            span { class: "nav-rail-label", "{item.label}" }
                        }
                    }
                }

                NavRailFooter {
                    div { class: "nav-user",
                        span { class: "nav-user-avatar", "{identity.initial()}" }
                        div { class: "nav-rail-label nav-user-meta",
                            span { class: "nav-user-name", "{identity.name}" }
                            Badge { variant: BadgeVariant::Secondary, "{identity.role.display_name()}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "nav-signout",
                        onclick: move |_| {
                            auth.logout();
                            navigator().push(Route::Landing {});
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        span { class: "nav-rail-label", "Sign out" }
                    }
                }
            }

            NavRailInset {
                header { class: "topbar",
                    NavRailToggle {
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                    span { class: "topbar-title", "{page_title}" }
                    div { class: "topbar-spacer" }
                    button {
                        r#type: "button",
                        class: "topbar-theme",
                        "aria-label": "Toggle dark mode",
                        onclick: move |_| theme.toggle(),
                        if dark {
                            Icon::<LdSun> { icon: LdSun, width: 18, height: 18 }
                        } else {
                            Icon::<LdMoon> { icon: LdMoon, width: 18, height: 18 }
                        }
                    }
                }
                div { class: "page-body",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Unknown path under a role prefix: go to that role's dashboard.
#[component]
fn RoleFallback(role: Role) -> Element {
    navigator().replace(Route::home(role));
    rsx! {}
}

#[component]
fn AdminFallback(rest: Vec<String>) -> Element {
    tracing::debug!(?rest, "Unknown admin path");
    rsx! { RoleFallback { role: Role::Admin } }
}

#[component]
fn DoctorFallback(rest: Vec<String>) -> Element {
    tracing::debug!(?rest, "Unknown doctor path");
    rsx! { RoleFallback { role: Role::Doctor } }
}

#[component]
fn PatientFallback(rest: Vec<String>) -> Element {
    tracing::debug!(?rest, "Unknown patient path");
    rsx! { RoleFallback { role: Role::Patient } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn public_routes_need_nothing() {
        assert_eq!(Route::Landing {}.access(), Access::Public);
        assert_eq!(Route::Login {}.access(), Access::Public);
        assert_eq!(Route::Register {}.access(), Access::Public);
        assert_eq!(Route::NotFound { route: vec!["nope".into()] }.access(), Access::Public);
    }

    #[test]
    fn role_areas_require_their_role() {
        assert_eq!(Route::AdminDashboard {}.access(), Access::Role(Role::Admin));
        assert_eq!(Route::DoctorVitals {}.access(), Access::Role(Role::Doctor));
        assert_eq!(Route::BookAppointment {}.access(), Access::Role(Role::Patient));
        assert_eq!(
            Route::PatientFallback { rest: vec!["settings".into()] }.access(),
            Access::Role(Role::Patient)
        );
    }

    #[test]
    fn homes_match_role_home_paths() {
        for role in shared_types::ALL_ROLES {
            assert_eq!(Route::home(*role).to_string(), role.home_path());
        }
    }

    #[test]
    fn every_menu_path_is_a_route() {
        for role in shared_types::ALL_ROLES {
            for item in menu_for(*role) {
                let Ok(route) = Route::from_str(item.path) else {
                    panic!("{} does not parse as a route", item.path);
                };
                assert_eq!(route.to_string(), item.path);
                assert_eq!(route.access(), Access::Role(*role));
            }
        }
    }

    #[test]
    fn patient_visiting_admin_area_is_sent_home() {
        use client::Session;
        use shared_types::Identity;

        let session = Session::authenticated(Identity {
            id: "p-1".into(),
            name: "Jane Roe".into(),
            email: None,
            role: Role::Patient,
        });
        assert_eq!(
            decide(&session, Route::PatientDashboard {}.access()),
            GuardOutcome::Render(Some(Role::Patient))
        );
        assert_eq!(
            decide(&session, Route::AdminDashboard {}.access()),
            GuardOutcome::RedirectHome(Role::Patient)
        );
    }
}
