//! Error types for the artscope plugin.
//!
//! This module defines the centralized error type [`ArtscopeError`] and a type alias
//! [`Result`] used throughout the crate. The three remote failure kinds
//! (`Network`, `Format`, `NotFound`) are the only errors the coordinator turns into
//! visible state; the rest surface during configuration and startup.

use thiserror::Error;

/// The main error type for artscope operations.
///
/// # Examples
///
/// ```
/// use artscope::ArtscopeError;
///
/// let err = ArtscopeError::NotFound(42);
/// assert_eq!(err.to_string(), "Artwork 42 not found");
/// ```
#[derive(Debug, Error)]
pub enum ArtscopeError {
    /// Transport-level failure talking to the collection API.
    ///
    /// Covers host-reported request failures and non-success HTTP statuses
    /// that carry no usable payload.
    #[error("Network error: {0}")]
    Network(String),

    /// The response arrived but did not have the expected shape.
    ///
    /// Raised when a list or search body lacks its `data` array or
    /// `pagination.total`, or when the body is not JSON at all.
    #[error("Unexpected response format: {0}")]
    Format(String),

    /// A detail request returned without a `data` payload.
    ///
    /// Callers treat this as "artwork does not exist" and leave the detail view.
    #[error("Artwork {0} not found")]
    NotFound(u64),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for artscope operations.
pub type Result<T> = std::result::Result<T, ArtscopeError>;
