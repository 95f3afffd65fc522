// Error types for the product catalog
// Caller-facing failures are surfaced here, never swallowed inside the store

use thiserror::Error;

/// Main error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No catalog entry has the given identity
    #[error("product with id {0} not found")]
    NotFound(u32),

    /// Rating ordinal outside the defined 0..=5 range
    #[error("invalid rating ordinal {0}, expected 0..=5")]
    InvalidRating(u8),

    /// I/O failure while writing a report
    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
