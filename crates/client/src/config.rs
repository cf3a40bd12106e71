use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Workspace `config.toml`, baked in so the browser build needs no file access.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Environment variable overriding `[api] base_url`.
pub const API_URL_ENV: &str = "MEDVAULT_API_URL";

/// Parse config text. Unparseable input falls back to defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse config.toml, using defaults");
        AppConfig::default()
    })
}

/// Replace the base URL when an override is present and non-empty.
pub fn apply_api_override(mut config: AppConfig, override_url: Option<String>) -> AppConfig {
    if let Some(url) = override_url.filter(|u| !u.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }
    config
}

#[cfg(target_arch = "wasm32")]
fn api_url_override() -> Option<String> {
    option_env!("MEDVAULT_API_URL").map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
fn api_url_override() -> Option<String> {
    let _ = dotenvy::dotenv();
    std::env::var(API_URL_ENV).ok()
}

/// Load the configuration once. Later calls return the same value.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = apply_api_override(parse_config(EMBEDDED_CONFIG), api_url_override());
        tracing::debug!(base_url = %config.api.base_url, features = ?config.features, "Configuration loaded");
        config
    })
}

/// Feature flags from the loaded configuration.
pub fn feature_flags() -> &'static FeatureFlags {
    &load_config().features
}
