use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdFileText, LdHeartPulse, LdShield};
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardDescription, CardHeader, CardTitle};

/// Public marketing page.
#[component]
pub fn Landing() -> Element {
    let auth = use_auth();
    let home = auth.role().map(Route::home);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing",
            header { class: "landing-nav",
                span { class: "landing-brand",
                    Icon::<LdHeartPulse> { icon: LdHeartPulse, width: 22, height: 22 }
                    "MedVault"
                }
                nav { class: "landing-nav-links",
                    if let Some(target) = home.clone() {
                        Link { to: target, class: "landing-cta", "Go to dashboard" }
                    } else {
                        Link { to: Route::Login {}, class: "landing-link", "Sign in" }
                        Link { to: Route::Register {}, class: "landing-cta", "Get started" }
                    }
                }
            }

            section { class: "landing-hero",
                h1 { "Your clinic, in one secure place" }
                p { class: "landing-lede",
                    "Book consultations, keep medical records together and let doctors "
                    "manage their queue without the paperwork."
                }
                div { class: "landing-hero-actions",
                    if let Some(target) = home {
                        Link { to: target, class: "landing-cta", "Open MedVault" }
                    } else {
                        Link { to: Route::Register {}, class: "landing-cta", "Create an account" }
                        Link { to: Route::Login {}, class: "landing-link", "I already have one" }
                    }
                }
            }

            section { class: "landing-features",
                Card {
                    CardHeader {
                        span { class: "landing-feature-icon",
                            Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 }
                        }
                        div {
                            CardTitle { "Appointments" }
                            CardDescription { "Pick a specialist and a time slot in seconds." }
                        }
                    }
                }
                Card {
                    CardHeader {
                        span { class: "landing-feature-icon",
                            Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 }
                        }
                        div {
                            CardTitle { "Medical records" }
                            CardDescription { "Reports and prescriptions, always at hand." }
                        }
                    }
                }
                Card {
                    CardHeader {
                        span { class: "landing-feature-icon",
                            Icon::<LdShield> { icon: LdShield, width: 20, height: 20 }
                        }
                        div {
                            CardTitle { "Role-based access" }
                            CardDescription { "Patients, doctors and administrators each see their own workspace." }
                        }
                    }
                }
            }

            footer { class: "landing-footer", "\u{a9} MedVault" }
        }
    }
}
