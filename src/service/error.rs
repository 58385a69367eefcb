//! Error types for the request surface.

use std::error::Error;
use std::fmt;

use crate::catalog::StoreError;

/// Error type for service operations.
#[derive(Debug)]
pub enum ServiceError {
    /// Template or category not found. Carries the full message.
    NotFound(String),
    /// Request body could not be decoded (malformed JSON, missing field).
    DecodeFailed(String),
    /// Request decoded but failed boundary validation.
    Invalid(String),
    /// Store failure other than not-found.
    Store(StoreError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::NotFound(msg) => write!(f, "{}", msg),
            ServiceError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
            ServiceError::Invalid(msg) => write!(f, "invalid request: {}", msg),
            ServiceError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ServiceError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        if err.is_not_found() {
            ServiceError::NotFound(err.to_string())
        } else {
            ServiceError::Store(err)
        }
    }
}

impl ServiceError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 404,
            ServiceError::DecodeFailed(_) => 400,
            ServiceError::Invalid(_) => 400,
            ServiceError::Store(_) => 500,
        }
    }
}
