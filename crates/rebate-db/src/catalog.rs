//! # Catalog
//!
//! The JSON document the in-memory store is loaded from.
//!
//! ## Format
//! ```json
//! {
//!   "rebates": [
//!     { "id": "REB001",
//!       "terms": { "incentive": "fixed_cash_amount", "amount": "100.00" } },
//!     { "id": "REB002",
//!       "terms": { "incentive": "fixed_rate_rebate", "percentage": "0.1" } }
//!   ],
//!   "products": [
//!     { "id": "PROD001",
//!       "supported_incentives": ["fixed_cash_amount", "fixed_rate_rebate"],
//!       "price": "50.00" }
//!   ]
//! }
//! ```
//!
//! Money and rates are written as decimal strings so nothing passes
//! through binary floating point.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rebate_core::validation::{validate_product, validate_rebate};
use rebate_core::{Product, Rebate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{DbError, DbResult};

/// Rebates and products served by a [`crate::DataStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub rebates: Vec<Rebate>,

    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// Parses a catalog document. Does not validate.
    pub fn from_json_str(json: &str) -> DbResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads, parses, and validates a catalog file.
    pub fn load(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading catalog");

        let json = fs::read_to_string(path).map_err(|source| DbError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Catalog::from_json_str(&json)?;
        catalog.validate()?;

        debug!(
            rebates = catalog.rebates.len(),
            products = catalog.products.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Checks every entry and rejects duplicate identifiers.
    ///
    /// ## Rules
    /// - Identifiers present and within length
    /// - Amounts and prices not negative
    /// - Percentages not negative
    /// - Each rebate ID and each product ID appears once
    ///
    /// Values that are well-formed but can never qualify (a zero amount, a
    /// percentage above 1) are accepted here; the rules refuse them.
    pub fn validate(&self) -> DbResult<()> {
        let mut seen = HashSet::new();
        for rebate in &self.rebates {
            validate_rebate(rebate)?;
            if !seen.insert(rebate.id.as_str()) {
                return Err(DbError::duplicate("rebate id", &rebate.id));
            }
        }

        let mut seen = HashSet::new();
        for product in &self.products {
            validate_product(product)?;
            if !seen.insert(product.id.as_str()) {
                return Err(DbError::duplicate("product id", &product.id));
            }
        }

        Ok(())
    }

    /// Serializes the catalog as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> DbResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rebate_core::{IncentiveType, Money, RebateTerms, ValidationError};
    use std::io::Write;

    const CATALOG: &str = r#"{
        "rebates": [
            { "id": "REB001", "terms": { "incentive": "fixed_cash_amount", "amount": "100.00" } },
            { "id": "REB002", "terms": { "incentive": "percentage_off", "percentage": "0.15" } }
        ],
        "products": [
            { "id": "PROD001", "supported_incentives": ["fixed_cash_amount"], "price": "50.00" },
            { "id": "PROD002", "price": "9.99" }
        ]
    }"#;

    #[test]
    fn test_parses_catalog_document() {
        let catalog = Catalog::from_json_str(CATALOG).unwrap();

        assert_eq!(catalog.rebates.len(), 2);
        assert_eq!(
            catalog.rebates[0].terms,
            RebateTerms::FixedCashAmount {
                amount: Money::from_major(100)
            }
        );
        assert_eq!(catalog.rebates[1].incentive(), IncentiveType::PercentageOff);

        assert!(catalog.products[0].supports(IncentiveType::FixedCashAmount));
        // Missing list means the product supports nothing
        assert!(catalog.products[1].supported_incentives.is_empty());
        assert_eq!(catalog.products[1].price, Money::from_cents(999));

        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_incentive() {
        let json = r#"{ "rebates": [ { "id": "R", "terms": { "incentive": "buy_one_get_one" } } ] }"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(DbError::CatalogParse(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"{
            "products": [
                { "id": "PROD001", "price": "1.00" },
                { "id": "PROD001", "price": "2.00" }
            ]
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert!(matches!(
            catalog.validate(),
            Err(DbError::UniqueViolation { ref value, .. }) if value == "PROD001"
        ));
    }

    #[test]
    fn test_rejects_negative_price() {
        let json = r#"{ "products": [ { "id": "PROD001", "price": "-1.00" } ] }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert!(matches!(
            catalog.validate(),
            Err(DbError::Validation(ValidationError::MustNotBeNegative { .. }))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.products.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(DbError::Io { .. })));
    }
}
