//! # Sample Catalog
//!
//! A small catalog for demos and tests: one product that accepts every
//! incentive type and one rebate per type.
//!
//! ```text
//! PROD001  price 50.00  supports all four
//!
//! REB001   fixed_cash_amount   amount      100.00
//! REB002   fixed_rate_rebate   percentage  0.10
//! REB003   amount_per_uom      amount      25.00
//! REB004   percentage_off      percentage  0.15
//! ```

use rebate_core::{Money, Product, Rate, Rebate, RebateTerms, SupportedIncentives};

use crate::catalog::Catalog;

/// Builds the sample catalog.
pub fn sample_catalog() -> Catalog {
    Catalog {
        rebates: vec![
            Rebate::new(
                "REB001",
                RebateTerms::FixedCashAmount {
                    amount: Money::from_cents(10_000),
                },
            ),
            Rebate::new(
                "REB002",
                RebateTerms::FixedRateRebate {
                    percentage: Rate::from_bps(1_000),
                },
            ),
            Rebate::new(
                "REB003",
                RebateTerms::AmountPerUom {
                    amount: Money::from_cents(2_500),
                },
            ),
            Rebate::new(
                "REB004",
                RebateTerms::PercentageOff {
                    percentage: Rate::from_bps(1_500),
                },
            ),
        ],
        products: vec![Product::new(
            "PROD001",
            SupportedIncentives::all(),
            Money::from_cents(5_000),
        )],
    }
}
