//! HTTP entry point - adapts incoming requests into invocation events
//!
//! A single catch-all route accepts any method and path, builds the
//! platform-shaped event, invokes the handler, and maps the returned
//! envelope back onto the HTTP response verbatim.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use appfactory_fn_sdk::{InvocationContext, InvocationEvent, ResponseEnvelope};

use crate::handler::ProcessingHandler;

/// Payload format version reported in synthesized events
const EVENT_VERSION: &str = "2.0";

/// Shared application state
pub struct AppState {
    pub handler: ProcessingHandler,
}

/// Create the router that feeds every request into the handler
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", any(handle_invocation))
        .route("/{*path}", any(handle_invocation))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn handle_invocation(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let request_id = Uuid::new_v4().to_string();

    let headers: HashMap<String, String> = request
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();

    let event = InvocationEvent {
        version: Some(EVENT_VERSION.to_string()),
        route_key: Some(format!("{} {}", method, path)),
        raw_path: Some(path),
        raw_query_string: request.uri().query().map(str::to_string),
        headers: Some(headers),
    };

    let ctx = InvocationContext { request_id };

    let envelope = state.handler.handle(&event, &ctx);
    into_http_response(envelope)
}

/// Map an envelope onto the HTTP response: status, headers, body verbatim
fn into_http_response(envelope: ResponseEnvelope) -> Response {
    let mut builder = Response::builder()
        .status(StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::OK));

    for (key, value) in envelope.headers {
        builder = builder.header(&key, &value);
    }

    match builder.body(Body::from(envelope.body)) {
        Ok(response) => response,
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build response").into_response(),
    }
}
