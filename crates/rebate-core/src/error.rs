//! # Error Types
//!
//! Domain-specific error types for rebate-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rebate-core errors (this file)                                        │
//! │  ├── CoreError        - Errors the engine surfaces to its caller       │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  ├── RuleNotFound     - Registry has no rule for an incentive type     │
//! │  └── StoreError       - Data provider failures                         │
//! │                                                                         │
//! │  rebate-db errors (separate crate)                                     │
//! │  └── DbError          - Catalog loading / ledger failures              │
//! │                                                                         │
//! │  Flow: DbError → StoreError → CoreError → CLI (anyhow)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What is NOT an error
//! An ineligible rebate, an unknown rule, or a missing rebate/product is a
//! normal *failed calculation*, reported through
//! [`CalculateRebateResult`](crate::types::CalculateRebateResult). Only a
//! malformed request and infrastructure failures come back as `Err`.

use thiserror::Error;

use crate::types::IncentiveType;

// =============================================================================
// Core Error
// =============================================================================

/// Errors surfaced by the rebate engine.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The request is missing required data.
    ///
    /// ## When This Occurs
    /// - Blank rebate identifier
    /// - Blank product identifier
    ///
    /// Signals a caller bug. Nothing is fetched or stored.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[source] ValidationError),

    /// A rule was asked to compute an amount for terms of another type.
    #[error("Rule for {expected} cannot compute terms of type {actual}")]
    TermsMismatch {
        expected: IncentiveType,
        actual: IncentiveType,
    },

    /// Decimal arithmetic overflowed while computing an amount.
    #[error("Rebate amount overflowed while computing {incentive}")]
    AmountOverflow { incentive: IncentiveType },

    /// A data provider failed for a reason other than a missing entity.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

// =============================================================================
// Rule Not Found
// =============================================================================

/// The registry holds no rule for the given incentive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No rule registered for incentive type: {0}")]
pub struct RuleNotFound(pub IncentiveType);

// =============================================================================
// Store Error
// =============================================================================

/// Failures reported by data providers.
///
/// ## How the Engine Treats These
/// ```text
/// NotFound (rebate/product) → failed result, nothing stored
/// NotFound (on store call)  → CoreError::Store
/// Unavailable               → CoreError::Store
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The store could not serve the call.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Checks whether this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation of requests and catalog data before any
/// business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., unparsable decimal).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for data provider calls.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
