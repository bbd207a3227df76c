//! # Product Repository

use std::sync::Arc;

use rebate_core::{IncentiveType, Product, ProductStore, StoreResult};
use tracing::debug;

use super::{read, write, StoreState};
use crate::error::{DbError, DbResult};

/// Repository for products.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    state: Arc<StoreState>,
}

impl ProductRepository {
    pub(crate) fn new(state: Arc<StoreState>) -> Self {
        ProductRepository { state }
    }

    /// Gets a product by its identifier.
    pub fn get_by_id(&self, id: &str) -> DbResult<Product> {
        let products = read(&self.state.products, "products")?;
        products
            .get(id)
            .cloned()
            .ok_or_else(|| DbError::not_found("Product", id))
    }

    /// Adds a product. Fails if the identifier is taken.
    pub fn insert(&self, product: Product) -> DbResult<()> {
        rebate_core::validation::validate_product(&product)?;

        debug!(id = %product.id, price = %product.price, "Inserting product");

        let mut products = write(&self.state.products, "products")?;
        if products.contains_key(&product.id) {
            return Err(DbError::duplicate("product id", product.id));
        }
        products.insert(product.id.clone(), product);
        Ok(())
    }

    /// Lists all products, ordered by identifier.
    pub fn list(&self) -> DbResult<Vec<Product>> {
        let products = read(&self.state.products, "products")?;
        let mut all: Vec<Product> = products.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    /// Lists products that accept the given incentive type.
    pub fn supporting(&self, incentive: IncentiveType) -> DbResult<Vec<Product>> {
        let mut matching = self.list()?;
        matching.retain(|product| product.supports(incentive));

        debug!(incentive = %incentive, count = matching.len(), "Products supporting incentive");
        Ok(matching)
    }
}

impl ProductStore for ProductRepository {
    fn get_product(&self, id: &str) -> StoreResult<Product> {
        Ok(self.get_by_id(id)?)
    }
}
