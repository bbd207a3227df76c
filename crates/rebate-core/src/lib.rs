//! # rebate-core: Pure Business Logic for Rebate Calculation
//!
//! This crate is the **heart** of the rebate engine. It picks the calculation
//! rule for a rebate, checks that the rule applies, computes the amount, and
//! hands the result to a store. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rebate Engine Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    rebate-cli (front end)                       │   │
//! │  │        --rebate REB001 --product PROD001 --volume 3             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CalculateRebateRequest                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rebate-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  engine   │─►│ registry  │─►│   rules   │  │   money   │  │   │
//! │  │   │ calculate │  │  resolve  │  │ 4 rules   │  │  Money    │  │   │
//! │  │   └─────┬─────┘  └───────────┘  └───────────┘  │  Rate     │  │   │
//! │  │         │ store traits                         └───────────┘  │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────┼───────────────────────────────────────────────────────┘   │
//! │            │                                                            │
//! │  ┌─────────▼───────────────────────────────────────────────────────┐   │
//! │  │                 rebate-db (Data Providers)                      │   │
//! │  │          JSON catalog, in-memory stores, calculation ledger     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (IncentiveType, Rebate, Product, request/result)
//! - [`money`] - Money and Rate over exact decimals (no floating point!)
//! - [`rules`] - The incentive rules and the registry that maps types to rules
//! - [`engine`] - The orchestrator that runs one calculation end to end
//! - [`store`] - Data provider traits implemented outside this crate
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use rebate_core::money::Money;
//! use rebate_core::types::Rate;
//! use rust_decimal::Decimal;
//!
//! let price = Money::from_cents(5000); // 50.00
//! let rate = Rate::from_bps(1000);     // 10%
//!
//! let rebate = price.apply_rate(rate).unwrap();
//! assert_eq!(rebate.amount(), Decimal::new(5, 0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod money;
pub mod rules;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::RebateEngine;
pub use error::{CoreError, CoreResult, RuleNotFound, StoreError, StoreResult, ValidationError};
pub use money::Money;
pub use rules::{IncentiveRule, RuleRegistry};
pub use store::{ProductStore, RebateStore};
pub use types::*;

// Callers build volumes and rates from this type.
pub use rust_decimal::Decimal;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a rebate or product identifier.
pub const MAX_IDENTIFIER_LEN: usize = 64;
