use std::fmt;

use async_trait::async_trait;

use super::types::{Category, Plant};

/// Errors that can occur while fetching the catalog.
///
/// Every variant means the catalog is unavailable. There is no retry; the
/// caller shows a notice and keeps whatever it already had.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The API answered with a non-success status.
    Api { status: u16, message: String },
    /// The response body was not the expected JSON shape.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// A read-only source of categories and plants.
///
/// Both calls return the complete dataset; there is no paging on the wire.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError>;

    async fn fetch_plants(&self) -> Result<Vec<Plant>, CatalogError>;
}
