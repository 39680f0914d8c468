//! The processing handler: API key gate plus canned processing payload
//!
//! Every invocation follows the same linear flow: authorize, build the
//! payload, return an envelope. All failures are absorbed here; the
//! runtime always receives a well-formed response.

use std::time::Instant;

use serde::Serialize;

use appfactory_fn_sdk::{HandlerError, InvocationContext, InvocationEvent, ResponseEnvelope};

use crate::config::FunctionConfig;

/// Fixed placeholder returned by the simulated processing step
const CANNED_DATA: &str = "Datos procesados con éxito en la nube";

/// Body of a successful invocation
#[derive(Debug, Serialize)]
pub struct ProcessingResult {
    pub status: &'static str,
    pub service: String,
    /// Invocation start time, epoch milliseconds
    pub timestamp: i64,
    pub data: String,
    /// Elapsed wall-clock time, rounded to 2 decimals
    pub processing_time_ms: f64,
}

/// Source of the payload's `data` field.
///
/// Production uses the canned constant; tests swap in a failing source to
/// exercise the internal-error path.
pub trait DataSource: Send + Sync {
    fn fetch(&self) -> Result<String, HandlerError>;
}

struct CannedData;

impl DataSource for CannedData {
    fn fetch(&self) -> Result<String, HandlerError> {
        Ok(CANNED_DATA.to_string())
    }
}

/// Stateless handler for the processing function.
///
/// Holds only immutable configuration; safe to share across concurrent
/// invocations without coordination.
pub struct ProcessingHandler {
    config: FunctionConfig,
    data_source: Box<dyn DataSource>,
}

impl ProcessingHandler {
    pub fn new(config: FunctionConfig) -> Self {
        Self {
            config,
            data_source: Box::new(CannedData),
        }
    }

    /// Create a handler with a custom data source
    pub fn with_data_source(config: FunctionConfig, data_source: Box<dyn DataSource>) -> Self {
        Self {
            config,
            data_source,
        }
    }

    /// Handle one typed invocation event.
    ///
    /// Never returns an error: unauthorized calls get the generic 401
    /// envelope, internal failures are logged and get the generic 500.
    pub fn handle(&self, event: &InvocationEvent, ctx: &InvocationContext) -> ResponseEnvelope {
        let started = Instant::now();
        let timestamp = chrono::Utc::now().timestamp_millis();

        if let Err(err) = self.authorize(event) {
            return self.finish(err.to_envelope());
        }

        match self.process(timestamp, started) {
            Ok(envelope) => self.finish(envelope),
            Err(err) => {
                tracing::error!(
                    request_id = %ctx.request_id,
                    error = %err,
                    version = event.version.as_deref().unwrap_or("-"),
                    route_key = event.route_key.as_deref().unwrap_or("-"),
                    raw_path = event.raw_path.as_deref().unwrap_or("-"),
                    raw_query_string = event.raw_query_string.as_deref().unwrap_or("-"),
                    "Invocation failed"
                );
                self.finish(err.to_envelope())
            }
        }
    }

    /// Handle an untyped platform event.
    ///
    /// The platform contract is a JSON mapping; an event whose shape does
    /// not decode (malformed headers, wrong types) is denied fail-closed
    /// rather than bubbling a decode error to the caller.
    pub fn handle_json(&self, raw: &serde_json::Value, ctx: &InvocationContext) -> ResponseEnvelope {
        match serde_json::from_value::<InvocationEvent>(raw.clone()) {
            Ok(event) => self.handle(&event, ctx),
            Err(err) => {
                let err = HandlerError::AuthExtraction(err.to_string());
                tracing::warn!(
                    request_id = %ctx.request_id,
                    error = %err,
                    headers = %raw.get("headers").unwrap_or(&serde_json::Value::Null),
                    "Malformed invocation event, denying"
                );
                self.finish(err.to_envelope())
            }
        }
    }

    fn authorize(&self, event: &InvocationEvent) -> Result<(), HandlerError> {
        if !self.config.auth_enabled {
            return Ok(());
        }

        // Fail-closed: no configured key means no access at all.
        let expected = match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(HandlerError::Unauthorized),
        };

        match event.header("x-api-key") {
            Some(provided) if provided == expected => Ok(()),
            _ => Err(HandlerError::Unauthorized),
        }
    }

    fn process(&self, timestamp: i64, started: Instant) -> Result<ResponseEnvelope, HandlerError> {
        let data = self.data_source.fetch()?;

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        let result = ProcessingResult {
            status: "success",
            service: self.config.service_label.clone(),
            timestamp,
            data,
            processing_time_ms: (elapsed_ms * 100.0).round() / 100.0,
        };

        Ok(ResponseEnvelope::json(200, &result)?)
    }

    /// Every envelope leaves with the CORS header, whatever the outcome.
    fn finish(&self, envelope: ResponseEnvelope) -> ResponseEnvelope {
        envelope.with_cors(&self.config.cors_origin)
    }
}
