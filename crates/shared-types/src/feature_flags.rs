use serde::{Deserialize, Serialize};

/// Feature flags controlling optional client behavior.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Render the reset link a non-production backend returns from
    /// `/api/auth/forgot-password`.
    #[serde(default)]
    pub dev_reset_links: bool,
}

/// Where the authentication backend lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

/// Paths of views owned outside this app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteConfig {
    #[serde(default = "default_login_path")]
    pub login: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            login: default_login_path(),
        }
    }
}

fn default_login_path() -> String {
    "/login".to_string()
}

/// Behavior of the reset confirmation page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResetConfig {
    /// Delay before redirecting to the login view after a successful reset.
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            redirect_delay_ms: default_redirect_delay_ms(),
        }
    }
}

fn default_redirect_delay_ms() -> u64 {
    3000
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub routes: RouteConfig,
    #[serde(default)]
    pub reset: ResetConfig,
}
