//! Flat cash rebate: pays the rebate's amount once, whatever the volume.

use super::{mismatched_terms, require_supported, terms_error, IncentiveRule};
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{
    CalculateRebateRequest, IncentiveType, Ineligibility, Product, Rebate, RebateTerms,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCashAmountRule;

impl IncentiveRule for FixedCashAmountRule {
    fn incentive_type(&self) -> IncentiveType {
        IncentiveType::FixedCashAmount
    }

    fn check_eligibility(
        &self,
        rebate: &Rebate,
        product: &Product,
        _request: &CalculateRebateRequest,
    ) -> Result<(), Ineligibility> {
        require_supported(product, self.incentive_type())?;

        match rebate.terms {
            RebateTerms::FixedCashAmount { amount } if amount.is_positive() => Ok(()),
            RebateTerms::FixedCashAmount { .. } => Err(Ineligibility::NonPositiveAmount),
            ref other => Err(mismatched_terms(self.incentive_type(), other)),
        }
    }

    fn compute_amount(
        &self,
        rebate: &Rebate,
        _product: &Product,
        _request: &CalculateRebateRequest,
    ) -> CoreResult<Money> {
        match rebate.terms {
            RebateTerms::FixedCashAmount { amount } => Ok(amount),
            ref other => Err(terms_error(self.incentive_type(), other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::rules::fixtures::*;

    fn cash(amount: i64) -> Rebate {
        rebate(RebateTerms::FixedCashAmount {
            amount: Money::from_major(amount),
        })
    }

    #[test]
    fn test_eligible_with_positive_amount() {
        let product = product(IncentiveType::FixedCashAmount, Money::zero());
        assert!(FixedCashAmountRule.is_eligible(&cash(100), &product, &request(1)));
    }

    #[test]
    fn test_zero_amount_is_ineligible() {
        let product = product(IncentiveType::FixedCashAmount, Money::zero());
        assert_eq!(
            FixedCashAmountRule.check_eligibility(&cash(0), &product, &request(1)),
            Err(Ineligibility::NonPositiveAmount)
        );
    }

    #[test]
    fn test_unsupported_product_is_ineligible() {
        let product = product(IncentiveType::FixedRateRebate, Money::from_major(50));
        assert_eq!(
            FixedCashAmountRule.check_eligibility(&cash(100), &product, &request(1)),
            Err(Ineligibility::UnsupportedIncentive {
                incentive: IncentiveType::FixedCashAmount
            })
        );
    }

    #[test]
    fn test_volume_is_ignored() {
        let product = product(IncentiveType::FixedCashAmount, Money::zero());

        // Zero or negative volume does not matter for a flat amount
        assert!(FixedCashAmountRule.is_eligible(&cash(150), &product, &request(0)));
        assert!(FixedCashAmountRule.is_eligible(&cash(150), &product, &request(-3)));

        for volume in [1, 5, 1000] {
            let amount = FixedCashAmountRule
                .compute_amount(&cash(150), &product, &request(volume))
                .unwrap();
            assert_eq!(amount, Money::from_major(150));
        }
    }

    #[test]
    fn test_foreign_terms_are_rejected() {
        let product = product(IncentiveType::FixedCashAmount, Money::zero());
        let per_unit = rebate(RebateTerms::AmountPerUom {
            amount: Money::from_major(25),
        });

        assert_eq!(
            FixedCashAmountRule.check_eligibility(&per_unit, &product, &request(1)),
            Err(Ineligibility::TermsMismatch {
                expected: IncentiveType::FixedCashAmount,
                actual: IncentiveType::AmountPerUom,
            })
        );
        assert!(matches!(
            FixedCashAmountRule.compute_amount(&per_unit, &product, &request(1)),
            Err(CoreError::TermsMismatch { .. })
        ));
    }
}
