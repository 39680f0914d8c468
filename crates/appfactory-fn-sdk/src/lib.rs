//! AppFactory Function SDK - Types for writing AppFactory processing functions
//!
//! This crate provides the platform-facing types a function uses: the
//! invocation event describing one incoming HTTP-triggered request, the
//! response envelope handed back to the platform, and the handler error
//! taxonomy.

pub mod error;
pub mod event;
pub mod response;

pub mod prelude {
    //! Common imports for AppFactory function handlers
    pub use crate::error::HandlerError;
    pub use crate::event::{InvocationContext, InvocationEvent};
    pub use crate::response::ResponseEnvelope;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use error::HandlerError;
pub use event::{InvocationContext, InvocationEvent};
pub use response::ResponseEnvelope;
