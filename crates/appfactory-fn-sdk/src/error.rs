//! Error types for AppFactory function handlers

use thiserror::Error;

use crate::ResponseEnvelope;

/// Errors that can occur in a handler.
///
/// None of these ever reach the caller as-is; the handler boundary maps
/// every variant onto a generic response envelope.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("auth extraction failed: {0}")]
    AuthExtraction(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::Unauthorized | HandlerError::AuthExtraction(_) => 401,
            HandlerError::Serialization(_) | HandlerError::Internal(_) => 500,
        }
    }

    /// Convert to the generic response envelope for this error class.
    ///
    /// Bodies are fixed per status; the error message itself goes to the
    /// logging sink only.
    pub fn to_envelope(&self) -> ResponseEnvelope {
        match self.status_code() {
            401 => ResponseEnvelope::unauthorized(),
            _ => ResponseEnvelope::internal_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_401() {
        assert_eq!(HandlerError::Unauthorized.status_code(), 401);
        assert_eq!(
            HandlerError::AuthExtraction("bad headers".into()).status_code(),
            401
        );
    }

    #[test]
    fn internal_errors_map_to_500() {
        assert_eq!(HandlerError::Internal("boom".into()).status_code(), 500);
    }

    #[test]
    fn envelope_never_carries_error_detail() {
        let envelope = HandlerError::Internal("secret detail".into()).to_envelope();
        assert!(!envelope.body.contains("secret detail"));
    }
}
