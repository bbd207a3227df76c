//! # rebate-db: Data Providers for the Rebate Engine
//!
//! This crate serves rebates and products to the engine from a JSON catalog
//! held in memory, and keeps a ledger of every calculation recorded.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rebate Engine Data Flow                          │
//! │                                                                         │
//! │  RebateEngine::calculate (rebate-core)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   rebate-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  DataStore    │    │  Repositories │    │   Catalog    │  │   │
//! │  │   │  (store.rs)   │    │ (rebate.rs)   │    │ (catalog.rs) │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ Arc<State>    │◄───│ RebateRepo    │    │ JSON in      │  │   │
//! │  │   │ RwLock maps   │    │ ProductRepo   │    │ validate     │  │   │
//! │  │   │ ledger        │    │ Calculations  │    │ sample       │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  catalog.json (read once at startup)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Catalog document parsing and validation
//! - [`store`] - The shared store handle
//! - [`repository`] - Repositories implementing the engine's provider traits
//! - [`seed`] - Bundled sample catalog
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use rebate_core::{CalculateRebateRequest, Decimal, RebateEngine};
//! use rebate_db::DataStore;
//!
//! let store = DataStore::sample();
//! let engine = RebateEngine::new(Arc::new(store.rebates()), Arc::new(store.products()));
//!
//! let request = CalculateRebateRequest::new("REB003", "PROD001", Decimal::from(3));
//! let result = engine.calculate(&request).unwrap();
//!
//! assert!(result.success);
//! assert_eq!(store.calculations().count().unwrap(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::Catalog;
pub use error::{DbError, DbResult};
pub use seed::sample_catalog;
pub use store::DataStore;

// Repository re-exports for convenience
pub use repository::{
    CalculationRecord, CalculationRepository, ProductRepository, RebateRepository,
};
