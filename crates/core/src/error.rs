//! View-layer error model.

use thiserror::Error;

/// Result type used across the view-state layer.
pub type ViewResult<T> = Result<T, ViewError>;

/// View-layer error.
///
/// Degraded *view* conditions (missing product data, malformed query values,
/// out-of-range variant indexes) are handled by substitution and never become
/// errors. This type covers genuine seam failures only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Writing a query parameter back to the address failed.
    #[error("query parameter write failed: {0}")]
    QueryWrite(String),

    /// A collaborator port is unavailable (e.g. poisoned shared state).
    #[error("port unavailable: {0}")]
    PortUnavailable(String),
}

impl ViewError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn query_write(msg: impl Into<String>) -> Self {
        Self::QueryWrite(msg.into())
    }

    pub fn port_unavailable(msg: impl Into<String>) -> Self {
        Self::PortUnavailable(msg.into())
    }
}
