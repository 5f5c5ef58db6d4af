use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the workspace root. Bundled at build time because the
/// web target has no filesystem to read it from.
const BUNDLED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse config file contents. Unparseable input yields the defaults, which
/// keep every optional feature off.
pub fn parse(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse config.toml, using defaults");
        AppConfig::default()
    })
}

/// The client configuration, loaded once.
///
/// `AUTH_API_BASE_URL`, when set at build time, overrides `api.base_url`.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let mut config = parse(BUNDLED_CONFIG);
        if let Some(base_url) = option_env!("AUTH_API_BASE_URL") {
            config.api.base_url = base_url.to_string();
        }
        tracing::debug!(features = ?config.features, api = %config.api.base_url, "client config loaded");
        config
    })
}
