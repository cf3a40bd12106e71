use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod auth;
mod fetch;
mod format_helpers;
mod routes;

use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Map the configured level name onto a tracing level. Unknown names log at `info`.
fn log_level(name: &str) -> dioxus::logger::tracing::Level {
    use dioxus::logger::tracing::Level;
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() {
    let config = client::config::load_config();
    if let Err(e) = dioxus::logger::init(log_level(&config.logging.level)) {
        eprintln!("logger already initialised: {e}");
    }
    tracing::info!(base_url = %config.api.base_url, "Starting MedVault dashboard");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let flags: FeatureFlags = client::config::feature_flags().clone();
    use_context_provider(|| flags);

    let api = use_context_provider(client::ApiClient::from_config);
    let mut auth = use_context_provider(|| AuthState::new(api.tokens()));

    // Resolve after the first frame so the guard shows its placeholder
    // instead of flashing protected content.
    use_hook(move || {
        spawn(async move {
            auth.resolve();
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::theme::ThemeSeed {
            shared_ui::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::logger::tracing::Level;

    #[test]
    fn log_levels_parse_loosely() {
        assert_eq!(log_level("DEBUG"), Level::DEBUG);
        assert_eq!(log_level(" warn "), Level::WARN);
        assert_eq!(log_level("verbose"), Level::INFO);
    }
}
