//! Error types for catalog introspection.

use thiserror::Error;

/// Main error type for catalog reads.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The database connection could not be established.
    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// An introspection query failed.
    #[error("Catalog query error: {context}: {source}")]
    Query {
        context: String,
        #[source]
        source: sqlx::Error,
    },
}

impl CatalogError {
    pub(crate) fn query(context: impl Into<String>, source: sqlx::Error) -> Self {
        CatalogError::Query {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
