//! Response envelope handed back to the hosting platform

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents the outgoing response for one invocation.
///
/// The body is always a JSON-encoded string; the platform forwards status,
/// headers, and body verbatim to the HTTP client. A fresh envelope is built
/// per invocation, nothing is shared across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// HTTP status code
    pub status_code: u16,

    /// Response headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// JSON-encoded response body
    #[serde(default)]
    pub body: String,
}

impl ResponseEnvelope {
    /// Create a JSON response with the given status code.
    ///
    /// Fails only if the body cannot be serialized; callers map that onto
    /// the generic internal-error envelope.
    ///
    /// # Example
    /// ```ignore
    /// ResponseEnvelope::json(200, &result)?
    /// ```
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code,
            headers: json_headers(),
            body: serde_json::to_string(body)?,
        })
    }

    /// Create the generic 401 Unauthorized envelope.
    ///
    /// The body is fixed; no detail about why authorization failed is
    /// exposed to the caller.
    pub fn unauthorized() -> Self {
        Self::canned(401, serde_json::json!({"status": "unauthorized"}))
    }

    /// Create the generic 500 Internal Error envelope.
    ///
    /// Internal error details stay in the logs, never in the body.
    pub fn internal_error() -> Self {
        Self::canned(
            500,
            serde_json::json!({"status": "error", "message": "internal_error"}),
        )
    }

    fn canned(status_code: u16, body: serde_json::Value) -> Self {
        Self {
            status_code,
            headers: json_headers(),
            body: body.to_string(),
        }
    }

    /// Add a header to the envelope (builder pattern).
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add the CORS allow-origin header.
    ///
    /// # Example
    /// ```ignore
    /// envelope.with_cors("*")
    /// envelope.with_cors("https://app.example.com")
    /// ```
    pub fn with_cors(self, origin: impl Into<String>) -> Self {
        self.with_header("Access-Control-Allow-Origin", origin)
    }
}

fn json_headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers
}
