//! # Data Store
//!
//! The handle the application holds. It owns the shared state and hands
//! out repositories over it.
//!
//! ## Lifecycle
//! ```text
//! Catalog::load(path) / sample_catalog()
//!       │
//!       ▼
//! DataStore::from_catalog(catalog) ← validates and indexes by ID
//!       │
//!       ├──► rebates()       → RebateRepository      (RebateStore)
//!       ├──► products()      → ProductRepository     (ProductStore)
//!       └──► calculations()  → CalculationRepository (ledger)
//! ```
//!
//! Nothing is written back to the catalog file; the ledger lives only as
//! long as the store.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::catalog::Catalog;
use crate::error::DbResult;
use crate::repository::{
    read, CalculationRepository, ProductRepository, RebateRepository, StoreState,
};
use crate::seed::sample_catalog;

/// In-memory store shared by all repositories.
///
/// ## Usage
/// ```rust
/// use rebate_db::DataStore;
///
/// let store = DataStore::sample();
/// let product = store.products().get_by_id("PROD001").unwrap();
/// assert!(product.price.is_positive());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    state: Arc<StoreState>,
}

impl DataStore {
    /// Store with no rebates, products, or calculations.
    pub fn empty() -> Self {
        DataStore::default()
    }

    /// Builds a store from a catalog after validating it.
    pub fn from_catalog(catalog: Catalog) -> DbResult<Self> {
        catalog.validate()?;
        Ok(DataStore::ready(catalog))
    }

    /// Loads a catalog file and builds a store from it.
    ///
    /// [`Catalog::load`] has already validated the file.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(DataStore::ready(Catalog::load(path)?))
    }

    /// Store loaded with the bundled sample catalog.
    pub fn sample() -> Self {
        DataStore::with_catalog(sample_catalog())
    }

    fn ready(catalog: Catalog) -> Self {
        info!(
            rebates = catalog.rebates.len(),
            products = catalog.products.len(),
            "Data store ready"
        );
        DataStore::with_catalog(catalog)
    }

    fn with_catalog(catalog: Catalog) -> Self {
        DataStore {
            state: Arc::new(StoreState::from(catalog)),
        }
    }

    /// Gets the rebate repository.
    pub fn rebates(&self) -> RebateRepository {
        RebateRepository::new(Arc::clone(&self.state))
    }

    /// Gets the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(Arc::clone(&self.state))
    }

    /// Gets the calculation ledger.
    pub fn calculations(&self) -> CalculationRepository {
        CalculationRepository::new(Arc::clone(&self.state))
    }

    /// Current contents as a catalog (ledger excluded).
    pub fn snapshot(&self) -> DbResult<Catalog> {
        Ok(Catalog {
            rebates: self.rebates().list()?,
            products: self.products().list()?,
        })
    }

    /// Number of rebates and products currently held.
    pub fn size(&self) -> DbResult<(usize, usize)> {
        let rebates = read(&self.state.rebates, "rebates")?.len();
        let products = read(&self.state.products, "products")?.len();
        Ok((rebates, products))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use std::io::Write;

    #[test]
    fn test_sample_store_contents() {
        let store = DataStore::sample();
        assert_eq!(store.size().unwrap(), (4, 1));
        assert_eq!(store.calculations().count().unwrap(), 0);
    }

    #[test]
    fn test_repositories_share_state() {
        let store = DataStore::empty();
        let clone = store.clone();

        store
            .products()
            .insert(rebate_core::Product::new(
                "PROD009",
                rebate_core::SupportedIncentives::all(),
                rebate_core::Money::from_major(1),
            ))
            .unwrap();

        assert!(clone.products().get_by_id("PROD009").is_ok());
    }

    #[test]
    fn test_from_catalog_rejects_duplicates() {
        let mut catalog = sample_catalog();
        let first = catalog.rebates[0].clone();
        catalog.rebates.push(first);

        assert!(matches!(
            DataStore::from_catalog(catalog),
            Err(DbError::UniqueViolation { .. })
        ));
    }

    #[test]
    fn test_snapshot_round_trips_sample() {
        let store = DataStore::sample();
        let snapshot = store.snapshot().unwrap();

        let rebuilt = DataStore::from_catalog(snapshot.clone()).unwrap();
        assert_eq!(rebuilt.snapshot().unwrap(), snapshot);
    }

    #[test]
    fn test_open_loads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_catalog().to_json_pretty().unwrap().as_bytes())
            .unwrap();

        let store = DataStore::open(file.path()).unwrap();
        assert_eq!(store.size().unwrap(), (4, 1));
    }

    #[test]
    fn test_open_still_rejects_invalid_file() {
        let json = r#"{
            "rebates": [
                { "id": "REB001", "terms": { "incentive": "fixed_cash_amount", "amount": "1" } },
                { "id": "REB001", "terms": { "incentive": "fixed_cash_amount", "amount": "2" } }
            ]
        }"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            DataStore::open(file.path()),
            Err(DbError::UniqueViolation { .. })
        ));
    }
}
