//! # Repository Module
//!
//! In-memory repositories over a shared [`crate::DataStore`].
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  RebateEngine                                                          │
//! │       │                                                                 │
//! │       │  get_rebate / get_product / store_calculation_result           │
//! │       ▼                                                                 │
//! │  RebateRepository ──┐                                                  │
//! │  ProductRepository ─┼──► StoreState (RwLock'd maps + ledger)           │
//! │  CalculationRepo ───┘                                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every repository is a cheap clone of an `Arc` to the same state, so a
//! calculation recorded through one is visible through the others.
//!
//! ## Available Repositories
//!
//! - [`RebateRepository`] - Rebate lookup and calculation recording
//! - [`ProductRepository`] - Product lookup
//! - [`CalculationRepository`] - Read access to the calculation ledger

pub mod calculation;
pub mod product;
pub mod rebate;

pub use calculation::{CalculationRecord, CalculationRepository};
pub use product::ProductRepository;
pub use rebate::RebateRepository;

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use rebate_core::{Product, Rebate};

use crate::catalog::Catalog;
use crate::error::{DbError, DbResult};

/// State shared by every repository handed out by one store.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) rebates: RwLock<HashMap<String, Rebate>>,
    pub(crate) products: RwLock<HashMap<String, Product>>,
    pub(crate) ledger: RwLock<Vec<CalculationRecord>>,
}

impl From<Catalog> for StoreState {
    fn from(catalog: Catalog) -> Self {
        StoreState {
            rebates: RwLock::new(
                catalog
                    .rebates
                    .into_iter()
                    .map(|rebate| (rebate.id.clone(), rebate))
                    .collect(),
            ),
            products: RwLock::new(
                catalog
                    .products
                    .into_iter()
                    .map(|product| (product.id.clone(), product))
                    .collect(),
            ),
            ledger: RwLock::default(),
        }
    }
}

pub(crate) fn read<'a, T>(
    lock: &'a RwLock<T>,
    name: &'static str,
) -> DbResult<RwLockReadGuard<'a, T>> {
    lock.read().map_err(|_| DbError::LockPoisoned(name))
}

pub(crate) fn write<'a, T>(
    lock: &'a RwLock<T>,
    name: &'static str,
) -> DbResult<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|_| DbError::LockPoisoned(name))
}
