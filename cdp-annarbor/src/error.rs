//! Error types for cdp-annarbor

use thiserror::Error;

/// Adapter error type
///
/// Media lookup failures never appear here: the media locator converts them
/// into an empty result at its own boundary. `Catalog` only arises while
/// building the catalog client.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Raw Legistar record did not have the expected shape
    #[error("Malformed Legistar record: {0}")]
    MalformedItem(#[from] serde_json::Error),

    /// Municipality pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Raw event source failed
    #[error("Event source error: {0}")]
    Source(#[from] anyhow::Error),

    /// Video catalog client could not be built
    #[error("Catalog client error: {0}")]
    Catalog(#[from] crate::media::CatalogError),

    /// cdp-common error
    #[error("Common error: {0}")]
    Common(#[from] cdp_common::Error),
}

/// Result type for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;
