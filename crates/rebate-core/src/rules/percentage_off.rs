//! Percentage off: a share of the total price of the order line.
//!
//! `amount = (price × volume) × percentage`, with `0 < percentage ≤ 1`.

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
pub struct PercentageOffRule;

impl IncentiveRule for PercentageOffRule {
    fn incentive_type(&self) -> IncentiveType {
        IncentiveType::PercentageOff
    }

    fn check_eligibility(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculateRebateRequest,
    ) -> Result<(), Ineligibility> {
        require_supported(product, self.incentive_type())?;

        match rebate.terms {
            RebateTerms::PercentageOff { percentage } => {
                if !percentage.is_positive() {
                    return Err(Ineligibility::NonPositivePercentage);
                }
                if !percentage.is_at_most_whole() {
                    return Err(Ineligibility::PercentageAboveWhole);
                }
            }
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
            RebateTerms::PercentageOff { percentage } => percentage,
            ref other => return Err(terms_error(self.incentive_type(), other)),
        };

        product
            .price
            .checked_mul(request.volume)
            .and_then(|line_total| line_total.apply_rate(percentage))
            .ok_or_else(|| overflow(self.incentive_type()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::*;

    fn percentage_off(percent: i64) -> Rebate {
        rebate(RebateTerms::PercentageOff {
            percentage: rate(percent),
        })
    }

    #[test]
    fn test_eligible_with_valid_data() {
        let product = product(IncentiveType::PercentageOff, Money::from_major(100));
        assert!(PercentageOffRule.is_eligible(&percentage_off(20), &product, &request(2)));
    }

    #[test]
    fn test_computes_share_of_line_total() {
        // (100 × 2) × 0.15 = 30
        let hundred = product(IncentiveType::PercentageOff, Money::from_major(100));
        let amount = PercentageOffRule
            .compute_amount(&percentage_off(15), &hundred, &request(2))
            .unwrap();
        assert_eq!(amount, Money::from_major(30));

        // (80 × 3) × 0.25 = 60
        let eighty = product(IncentiveType::PercentageOff, Money::from_major(80));
        let amount = PercentageOffRule
            .compute_amount(&percentage_off(25), &eighty, &request(3))
            .unwrap();
        assert_eq!(amount, Money::from_major(60));
    }

    #[test]
    fn test_percentage_bounds() {
        let product = product(IncentiveType::PercentageOff, Money::from_major(100));

        // Exactly 100% is allowed
        assert!(PercentageOffRule.is_eligible(&percentage_off(100), &product, &request(1)));

        assert_eq!(
            PercentageOffRule.check_eligibility(&percentage_off(101), &product, &request(1)),
            Err(Ineligibility::PercentageAboveWhole)
        );
        assert_eq!(
            PercentageOffRule.check_eligibility(&percentage_off(0), &product, &request(1)),
            Err(Ineligibility::NonPositivePercentage)
        );
    }

    #[test]
    fn test_requires_price_and_volume() {
        let free = product(IncentiveType::PercentageOff, Money::zero());
        assert_eq!(
            PercentageOffRule.check_eligibility(&percentage_off(15), &free, &request(2)),
            Err(Ineligibility::NonPositivePrice)
        );

        let priced = product(IncentiveType::PercentageOff, Money::from_major(100));
        assert_eq!(
            PercentageOffRule.check_eligibility(&percentage_off(15), &priced, &request(0)),
            Err(Ineligibility::NonPositiveVolume)
        );
    }
}
