//! # Data Provider Traits
//!
//! The engine reaches rebates, products, and the calculation ledger only
//! through these traits. rebate-db implements them in memory; tests use
//! hand-written fakes.
//!
//! ```text
//! RebateEngine ──get_rebate──────────────► RebateStore
//!              ──get_product─────────────► ProductStore
//!              ──store_calculation_result► RebateStore   (success only)
//! ```
//!
//! Implementations own their own locking, idempotency, and durability.

use crate::error::StoreResult;
use crate::money::Money;
use crate::types::{Product, Rebate};

/// Source of rebate definitions and sink for successful calculations.
pub trait RebateStore: Send + Sync {
    /// Looks up a rebate by identifier.
    ///
    /// Returns `StoreError::NotFound` when no such rebate exists.
    fn get_rebate(&self, id: &str) -> StoreResult<Rebate>;

    /// Records a successful calculation.
    fn store_calculation_result(&self, rebate: &Rebate, amount: Money) -> StoreResult<()>;
}

/// Source of products.
pub trait ProductStore: Send + Sync {
    /// Looks up a product by identifier.
    ///
    /// Returns `StoreError::NotFound` when no such product exists.
    fn get_product(&self, id: &str) -> StoreResult<Product>;
}
