//! Function configuration

use std::env;

/// Function configuration loaded from environment variables.
///
/// The handler never reads the environment itself; the binary loads this
/// once and passes it in at construction time, so tests can inject any
/// configuration they need.
#[derive(Debug, Clone)]
pub struct FunctionConfig {
    /// Expected API key. While auth is enabled, an unset or empty key
    /// denies all access (fail-closed).
    pub api_key: Option<String>,

    /// Whether the API key gate is active at all. Disabling it yields the
    /// open variant of the function.
    pub auth_enabled: bool,

    /// Origin allowed for cross-origin calls
    pub cors_origin: String,

    /// Label reported in the success payload's `service` field
    pub service_label: String,

    /// Port for the HTTP listener
    pub port: u16,
}

impl FunctionConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("LAMBDA_API_KEY").ok().filter(|k| !k.is_empty()),

            auth_enabled: env::var("LAMBDA_AUTH_ENABLED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),

            cors_origin: env::var("LAMBDA_CORS_ORIGIN").unwrap_or_else(|_| "*".to_string()),

            service_label: env::var("LAMBDA_SERVICE_LABEL")
                .unwrap_or_else(|_| "AppFactory Hybrid Backend".to_string()),

            port: env::var("LAMBDA_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
        }
    }
}

impl Default for FunctionConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
