//! # Incentive Rules
//!
//! One rule per [`IncentiveType`]. Each rule answers two questions about a
//! (rebate, product, request) triple:
//!
//! 1. **May I apply?** - [`IncentiveRule::check_eligibility`]
//! 2. **How much?**    - [`IncentiveRule::compute_amount`]
//!
//! ## Rule Table
//! ```text
//! ┌──────────────────┬──────────────────────────────────┬──────────────────────────┐
//! │ Rule             │ Eligible when                    │ Amount                   │
//! ├──────────────────┼──────────────────────────────────┼──────────────────────────┤
//! │ FixedCashAmount  │ supported, amount > 0            │ amount                   │
//! │ FixedRateRebate  │ supported, rate > 0, price > 0,  │ price × rate × volume    │
//! │                  │ volume > 0                       │                          │
//! │ AmountPerUom     │ supported, amount > 0,           │ amount × volume          │
//! │                  │ volume > 0                       │                          │
//! │ PercentageOff    │ supported, 0 < rate ≤ 1,         │ (price × volume) × rate  │
//! │                  │ price > 0, volume > 0            │                          │
//! └──────────────────┴──────────────────────────────────┴──────────────────────────┘
//! ```
//!
//! Every rule that multiplies by volume requires a positive volume.
//! FixedCashAmount never looks at volume.
//!
//! ## Adding a Rule
//! Add a variant to [`IncentiveType`] and [`RebateTerms`], write a unit struct
//! implementing [`IncentiveRule`], and register it in
//! [`RuleRegistry::standard`]. The engine does not change.

mod amount_per_uom;
mod fixed_cash_amount;
mod fixed_rate_rebate;
mod percentage_off;
mod registry;

pub use amount_per_uom::AmountPerUomRule;
pub use fixed_cash_amount::FixedCashAmountRule;
pub use fixed_rate_rebate::FixedRateRebateRule;
pub use percentage_off::PercentageOffRule;
pub use registry::RuleRegistry;

use rust_decimal::Decimal;
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{
    CalculateRebateRequest, IncentiveType, Ineligibility, Product, Rebate, RebateTerms,
};

// =============================================================================
// Rule Trait
// =============================================================================

/// A stateless rebate calculation rule.
///
/// Rules never fetch or store anything; they see only the three values
/// handed to them.
pub trait IncentiveRule: Send + Sync + fmt::Debug {
    /// The incentive type this rule is the authority for.
    fn incentive_type(&self) -> IncentiveType;

    /// Decides whether the rule applies, reporting the first failed condition.
    fn check_eligibility(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculateRebateRequest,
    ) -> Result<(), Ineligibility>;

    /// Boolean form of [`check_eligibility`](Self::check_eligibility).
    fn is_eligible(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculateRebateRequest,
    ) -> bool {
        self.check_eligibility(rebate, product, request).is_ok()
    }

    /// Computes the rebate amount.
    ///
    /// Only meaningful after a successful eligibility check. Fails with
    /// `TermsMismatch` for foreign terms and `AmountOverflow` when the
    /// decimal product does not fit.
    fn compute_amount(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculateRebateRequest,
    ) -> CoreResult<Money>;
}

// =============================================================================
// Shared Conditions
// =============================================================================

fn require_supported(product: &Product, incentive: IncentiveType) -> Result<(), Ineligibility> {
    if product.supports(incentive) {
        Ok(())
    } else {
        Err(Ineligibility::UnsupportedIncentive { incentive })
    }
}

fn require_positive_price(product: &Product) -> Result<(), Ineligibility> {
    if product.price.is_positive() {
        Ok(())
    } else {
        Err(Ineligibility::NonPositivePrice)
    }
}

fn require_positive_volume(request: &CalculateRebateRequest) -> Result<(), Ineligibility> {
    if request.volume > Decimal::ZERO {
        Ok(())
    } else {
        Err(Ineligibility::NonPositiveVolume)
    }
}

fn mismatched_terms(expected: IncentiveType, terms: &RebateTerms) -> Ineligibility {
    Ineligibility::TermsMismatch {
        expected,
        actual: terms.incentive(),
    }
}

fn terms_error(expected: IncentiveType, terms: &RebateTerms) -> CoreError {
    CoreError::TermsMismatch {
        expected,
        actual: terms.incentive(),
    }
}

fn overflow(incentive: IncentiveType) -> CoreError {
    CoreError::AmountOverflow { incentive }
}

// =============================================================================
// Test Fixtures
// =============================================================================
