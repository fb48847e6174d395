//! Configuration handling for the TUI

/// Default backend endpoint for onboarding submissions
const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/mentee-onboarding";

/// Environment variable overriding the backend endpoint
const ENDPOINT_ENV_VAR: &str = "ONBOARDING_BACKEND_URL";

/// Application configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL receiving the onboarding submission
    pub endpoint_url: String,
}

impl AppConfig {
    /// Resolve configuration from the environment
    pub fn from_env() -> Self {
        Self {
            endpoint_url: resolve_endpoint(std::env::var(ENDPOINT_ENV_VAR).ok()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Pick the configured endpoint, falling back to the default when unset
/// or blank
fn resolve_endpoint(configured: Option<String>) -> String {
    match configured {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_ENDPOINT.to_string(),
    }
}
