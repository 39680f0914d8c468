//! AppFactory hybrid backend processing function
//!
//! A single stateless HTTP-triggered function: API key gate, canned
//! processing payload, generic error handling. See `handler` for the
//! invocation contract and `server` for the HTTP adapter.

pub mod config;
pub mod handler;
pub mod server;

pub use config::FunctionConfig;
pub use handler::ProcessingHandler;
