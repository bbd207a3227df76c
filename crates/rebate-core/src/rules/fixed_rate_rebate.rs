//! Fixed-rate rebate: a share of the unit price for every unit bought.
//!
//! `amount = price × percentage × volume`

use super::{
    mismatched_terms, overflow, require_positive_price, require_positive_volume,
    require_supported, terms_error, IncentiveRule,
};
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{
    CalculateRebateRequest, IncentiveType, Ineligibility, Product, Rebate, RebateTerms,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRateRebateRule;

impl IncentiveRule for FixedRateRebateRule {
    fn incentive_type(&self) -> IncentiveType {
        IncentiveType::FixedRateRebate
    }

    fn check_eligibility(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculateRebateRequest,
    ) -> Result<(), Ineligibility> {
        require_supported(product, self.incentive_type())?;

        match rebate.terms {
            RebateTerms::FixedRateRebate { percentage } if !percentage.is_positive() => {
                return Err(Ineligibility::NonPositivePercentage)
            }
            RebateTerms::FixedRateRebate { .. } => {}
            ref other => return Err(mismatched_terms(self.incentive_type(), other)),
        }

        require_positive_price(product)?;
        require_positive_volume(request)
    }

    fn compute_amount(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculateRebateRequest,
    ) -> CoreResult<Money> {
        let percentage = match rebate.terms {
            RebateTerms::FixedRateRebate { percentage } => percentage,
            ref other => return Err(terms_error(self.incentive_type(), other)),
        };

        product
            .price
            .apply_rate(percentage)
            .and_then(|per_unit| per_unit.checked_mul(request.volume))
            .ok_or_else(|| overflow(self.incentive_type()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::*;
    use rust_decimal::Decimal;

    fn fixed_rate(percent: i64) -> Rebate {
        rebate(RebateTerms::FixedRateRebate {
            percentage: rate(percent),
        })
    }

    #[test]
    fn test_eligible_with_valid_data() {
        let product = product(IncentiveType::FixedRateRebate, Money::from_major(100));
        assert!(FixedRateRebateRule.is_eligible(&fixed_rate(10), &product, &request(2)));
    }

    #[test]
    fn test_computes_price_times_rate_times_volume() {
        // 50 × 0.10 × 2 = 10
        let cheap = product(IncentiveType::FixedRateRebate, Money::from_major(50));
        let amount = FixedRateRebateRule
            .compute_amount(&fixed_rate(10), &cheap, &request(2))
            .unwrap();
        assert_eq!(amount, Money::from_major(10));

        // 200 × 0.15 × 3 = 90
        let dear = product(IncentiveType::FixedRateRebate, Money::from_major(200));
        let amount = FixedRateRebateRule
            .compute_amount(&fixed_rate(15), &dear, &request(3))
            .unwrap();
        assert_eq!(amount, Money::from_major(90));
    }

    #[test]
    fn test_fractional_volume_stays_exact() {
        // 19.99 × 0.10 × 2.5 = 4.9975
        let product = product(IncentiveType::FixedRateRebate, Money::from_cents(1999));
        let request = CalculateRebateRequest::new("REB001", "PROD001", Decimal::new(25, 1));
        let amount = FixedRateRebateRule
            .compute_amount(&fixed_rate(10), &product, &request)
            .unwrap();
        assert_eq!(amount.amount(), Decimal::new(49975, 4));
    }

    #[test]
    fn test_ineligible_cases() {
        let priced = product(IncentiveType::FixedRateRebate, Money::from_major(50));

        assert_eq!(
            FixedRateRebateRule.check_eligibility(&fixed_rate(0), &priced, &request(2)),
            Err(Ineligibility::NonPositivePercentage)
        );
        assert_eq!(
            FixedRateRebateRule.check_eligibility(&fixed_rate(-5), &priced, &request(2)),
            Err(Ineligibility::NonPositivePercentage)
        );
        assert_eq!(
            FixedRateRebateRule.check_eligibility(&fixed_rate(10), &priced, &request(0)),
            Err(Ineligibility::NonPositiveVolume)
        );

        let free = product(IncentiveType::FixedRateRebate, Money::zero());
        assert_eq!(
            FixedRateRebateRule.check_eligibility(&fixed_rate(10), &free, &request(2)),
            Err(Ineligibility::NonPositivePrice)
        );

        let unsupported = product(IncentiveType::PercentageOff, Money::from_major(50));
        assert_eq!(
            FixedRateRebateRule.check_eligibility(&fixed_rate(10), &unsupported, &request(2)),
            Err(Ineligibility::UnsupportedIncentive {
                incentive: IncentiveType::FixedRateRebate
            })
        );
    }
}
