//! Error types for userstore
//!
//! Provides a unified error type for store, routing and transport failures.

use thiserror::Error;

use crate::protocol::Status;

/// Result type alias using UserStoreError
pub type Result<T> = std::result::Result<T, UserStoreError>;

/// Unified error type for userstore operations
#[derive(Debug, Error)]
pub enum UserStoreError {
    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("User not found")]
    NotFound(i64),

    #[error("User already exists")]
    Conflict(i64),

    #[error("Name is required")]
    EmptyName,

    #[error("User ids exhausted")]
    IdsExhausted,

    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("404 page not found")]
    RouteNotFound,

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("Codec error: {0}")]
    Codec(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl UserStoreError {
    /// HTTP status this error is surfaced as
    pub fn status(&self) -> Status {
        match self {
            UserStoreError::NotFound(_) | UserStoreError::RouteNotFound => Status::NotFound,
            UserStoreError::Conflict(_) => Status::Conflict,
            UserStoreError::EmptyName
            | UserStoreError::BadRequest(_)
            | UserStoreError::Codec(_) => Status::BadRequest,
            UserStoreError::MethodNotAllowed => Status::MethodNotAllowed,
            UserStoreError::IdsExhausted
            | UserStoreError::Io(_)
            | UserStoreError::Config(_) => Status::InternalServerError,
        }
    }
}
