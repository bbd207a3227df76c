//! # Data Store Error Types
//!
//! Error types for catalog loading and store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error / ValidationError                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (rebate-core) ← What the engine sees                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Failed result (NotFound) or CoreError::Store (anything else)          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use rebate_core::{StoreError, ValidationError};
use thiserror::Error;

/// Data store errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in the catalog.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Identifier already present.
    ///
    /// ## When This Occurs
    /// - Catalog lists the same rebate or product twice
    /// - Inserting an entity whose ID is taken
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog document is not valid JSON or has the wrong shape.
    #[error("Invalid catalog document: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Catalog entity failed validation.
    #[error("Invalid catalog entry: {0}")]
    Validation(#[from] ValidationError),

    /// A sum over the ledger does not fit in a decimal.
    #[error("Ledger total overflowed after {records} records")]
    TotalOverflow { records: usize },

    /// A writer panicked while holding a store lock.
    #[error("Store lock poisoned: {0}")]
    LockPoisoned(&'static str),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a UniqueViolation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        DbError::UniqueViolation {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Convert store errors to the engine-facing StoreError.
///
/// ## Error Mapping
/// ```text
/// DbError::NotFound   → StoreError::NotFound
/// Other               → StoreError::Unavailable
/// ```
impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => StoreError::NotFound { entity, id },
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}

/// Result type for data store operations.
pub type DbResult<T> = Result<T, DbError>;
