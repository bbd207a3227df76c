//! Amount per unit of measure: a fixed amount for every unit bought.
//!
//! `amount = rebate amount × volume`
//!
//! The product price plays no part, but the product must still list the
//! incentive as supported.

use super::{
    mismatched_terms, overflow, require_positive_volume, require_supported, terms_error,
    IncentiveRule,
};
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{
    CalculateRebateRequest, IncentiveType, Ineligibility, Product, Rebate, RebateTerms,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct AmountPerUomRule;

impl IncentiveRule for AmountPerUomRule {
    fn incentive_type(&self) -> IncentiveType {
        IncentiveType::AmountPerUom
    }

    fn check_eligibility(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculateRebateRequest,
    ) -> Result<(), Ineligibility> {
        require_supported(product, self.incentive_type())?;

        match rebate.terms {
            RebateTerms::AmountPerUom { amount } if !amount.is_positive() => {
                return Err(Ineligibility::NonPositiveAmount)
            }
            RebateTerms::AmountPerUom { .. } => {}
            ref other => return Err(mismatched_terms(self.incentive_type(), other)),
        }

        require_positive_volume(request)
    }

    fn compute_amount(
        &self,
        rebate: &Rebate,
        _product: &Product,
        request: &CalculateRebateRequest,
    ) -> CoreResult<Money> {
        match rebate.terms {
            RebateTerms::AmountPerUom { amount } => amount
                .checked_mul(request.volume)
                .ok_or_else(|| overflow(self.incentive_type())),
            ref other => Err(terms_error(self.incentive_type(), other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::rules::fixtures::*;
    use rust_decimal::Decimal;

    fn per_unit(amount: i64) -> Rebate {
        rebate(RebateTerms::AmountPerUom {
            amount: Money::from_major(amount),
        })
    }

    #[test]
    fn test_eligible_with_valid_data() {
        // Price is irrelevant for this rule
        let product = product(IncentiveType::AmountPerUom, Money::zero());
        assert!(AmountPerUomRule.is_eligible(&per_unit(25), &product, &request(4)));
    }

    #[test]
    fn test_computes_amount_times_volume() {
        let product = product(IncentiveType::AmountPerUom, Money::zero());

        let amount = AmountPerUomRule
            .compute_amount(&per_unit(25), &product, &request(3))
            .unwrap();
        assert_eq!(amount, Money::from_major(75));

        let amount = AmountPerUomRule
            .compute_amount(&per_unit(30), &product, &request(5))
            .unwrap();
        assert_eq!(amount, Money::from_major(150));
    }

    #[test]
    fn test_requires_positive_volume() {
        let product = product(IncentiveType::AmountPerUom, Money::zero());
        assert_eq!(
            AmountPerUomRule.check_eligibility(&per_unit(25), &product, &request(0)),
            Err(Ineligibility::NonPositiveVolume)
        );
        assert_eq!(
            AmountPerUomRule.check_eligibility(&per_unit(25), &product, &request(-1)),
            Err(Ineligibility::NonPositiveVolume)
        );
    }

    #[test]
    fn test_requires_positive_amount() {
        let product = product(IncentiveType::AmountPerUom, Money::zero());
        assert_eq!(
            AmountPerUomRule.check_eligibility(&per_unit(0), &product, &request(3)),
            Err(Ineligibility::NonPositiveAmount)
        );
    }

    #[test]
    fn test_overflow_is_an_error() {
        let product = product(IncentiveType::AmountPerUom, Money::zero());
        let huge = rebate(RebateTerms::AmountPerUom {
            amount: Money::new(Decimal::MAX),
        });
        assert!(matches!(
            AmountPerUomRule.compute_amount(&huge, &product, &request(2)),
            Err(CoreError::AmountOverflow {
                incentive: IncentiveType::AmountPerUom
            })
        ));
    }
}
