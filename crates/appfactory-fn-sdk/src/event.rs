//! Invocation event and context for a single HTTP-triggered call

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents one incoming HTTP-triggered invocation.
///
/// The platform delivers this as an untyped JSON mapping; everything is
/// optional. `headers` carries the client's HTTP headers (name casing
/// varies by client), the remaining fields are diagnostics that are only
/// read when an invocation fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvocationEvent {
    /// Payload format version reported by the platform
    pub version: Option<String>,

    /// Route key, e.g. "GET /process"
    pub route_key: Option<String>,

    /// Request path as received
    pub raw_path: Option<String>,

    /// Unparsed query string (may be empty)
    pub raw_query_string: Option<String>,

    /// HTTP headers
    pub headers: Option<HashMap<String, String>>,
}

impl InvocationEvent {
    /// Get a header value (case-insensitive lookup).
    ///
    /// # Example
    /// ```ignore
    /// let key = event.header("x-api-key"); // matches "X-Api-Key" too
    /// ```
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.as_ref().and_then(|headers| {
            headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v.as_str())
        })
    }
}

/// Per-invocation context supplied by the runtime.
///
/// Handlers accept it but only use the request id for log correlation.
#[derive(Debug, Clone, Default)]
pub struct InvocationContext {
    /// Request ID for tracing
    pub request_id: String,
}
