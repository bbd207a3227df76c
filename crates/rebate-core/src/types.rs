//! # Domain Types
//!
//! Core domain types used throughout the rebate engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │    Rebate       │   │      Product         │   │ CalculateRebate │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │    Request      │  │
//! │  │  id             │   │  id                  │   │  ─────────────  │  │
//! │  │  terms ─────┐   │   │  supported_incentives│   │  rebate_id      │  │
//! │  └─────────────┼───┘   │  price (Money)       │   │  product_id     │  │
//! │                │       └──────────────────────┘   │  volume         │  │
//! │                ▼                                  └─────────────────┘  │
//! │  ┌──────────────────────────────────────────┐                          │
//! │  │ RebateTerms (one variant per incentive)  │                          │
//! │  │  FixedCashAmount { amount }              │                          │
//! │  │  FixedRateRebate { percentage }          │                          │
//! │  │  AmountPerUom    { amount }              │                          │
//! │  │  PercentageOff   { percentage }          │                          │
//! │  └──────────────────────────────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tagged Terms
//! A rebate carries only the field its incentive type uses. A rule for
//! percentage-based rebates cannot read an `amount`, because there is none.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Incentive Type
// =============================================================================

/// The category of rebate calculation rule.
///
/// ## Closed Set
/// New incentive types are added by adding a variant here *and* a rule in
/// [`crate::rules`]. There is no runtime registration of new types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncentiveType {
    /// A flat amount, independent of volume.
    FixedCashAmount,
    /// Product price × rate × volume.
    FixedRateRebate,
    /// A fixed amount per unit of measure.
    AmountPerUom,
    /// A percentage of the total price (price × volume).
    PercentageOff,
}

impl IncentiveType {
    /// Every incentive type, in declaration order.
    pub const ALL: [IncentiveType; 4] = [
        IncentiveType::FixedCashAmount,
        IncentiveType::FixedRateRebate,
        IncentiveType::AmountPerUom,
        IncentiveType::PercentageOff,
    ];

    /// Stable text form used in catalogs and on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            IncentiveType::FixedCashAmount => "fixed_cash_amount",
            IncentiveType::FixedRateRebate => "fixed_rate_rebate",
            IncentiveType::AmountPerUom => "amount_per_uom",
            IncentiveType::PercentageOff => "percentage_off",
        }
    }
}

impl fmt::Display for IncentiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncentiveType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        IncentiveType::ALL
            .into_iter()
            .find(|incentive| incentive.as_str() == normalized)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "incentive type".to_string(),
                allowed: IncentiveType::ALL
                    .iter()
                    .map(|incentive| incentive.as_str().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Supported Incentives
// =============================================================================

/// The set of incentive types a product accepts.
///
/// ## Why a Set, Not Flags?
/// A product may support several incentive types at once. Membership is a
/// plain `contains` check; there is no flag arithmetic to get wrong.
///
/// Serializes as a JSON array: `["fixed_cash_amount", "percentage_off"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportedIncentives(BTreeSet<IncentiveType>);

impl SupportedIncentives {
    /// A product that supports nothing.
    pub fn none() -> Self {
        SupportedIncentives(BTreeSet::new())
    }

    /// A product that supports every incentive type.
    pub fn all() -> Self {
        IncentiveType::ALL.into_iter().collect()
    }

    /// Builder-style insert.
    pub fn with(mut self, incentive: IncentiveType) -> Self {
        self.0.insert(incentive);
        self
    }

    /// Membership test.
    #[inline]
    pub fn contains(&self, incentive: IncentiveType) -> bool {
        self.0.contains(&incentive)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<IncentiveType> for SupportedIncentives {
    fn from_iter<I: IntoIterator<Item = IncentiveType>>(iter: I) -> Self {
        SupportedIncentives(iter.into_iter().collect())
    }
}

impl From<IncentiveType> for SupportedIncentives {
    fn from(incentive: IncentiveType) -> Self {
        SupportedIncentives::none().with(incentive)
    }
}

// =============================================================================
// Rate
// =============================================================================

/// A rate expressed as an exact decimal fraction.
///
/// ## Representation
/// `0.15` = 15%. Rates are *expected* to lie in `[0, 1]`; whether a given
/// rate is acceptable is each rule's decision, not this type's.
///
/// Basis points are supported for convenience: 1 bps = 0.01% = 0.0001.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rate(Decimal);

impl Rate {
    /// Creates a rate from a fraction (`0.15` = 15%).
    #[inline]
    pub const fn new(fraction: Decimal) -> Self {
        Rate(fraction)
    }

    /// Creates a rate from basis points (`1500` = 15%).
    #[inline]
    pub fn from_bps(bps: u32) -> Self {
        Rate(Decimal::new(i64::from(bps), 4))
    }

    /// Returns the rate as a fraction.
    #[inline]
    pub const fn fraction(&self) -> Decimal {
        self.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(Decimal::ZERO)
    }

    /// Checks if the rate is strictly greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the rate is at most 100%.
    #[inline]
    pub fn is_at_most_whole(&self) -> bool {
        self.0 <= Decimal::ONE
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

// =============================================================================
// Rebate
// =============================================================================

/// The incentive-specific terms of a rebate.
///
/// Serialized with an `incentive` tag:
/// ```json
/// { "incentive": "fixed_rate_rebate", "percentage": "0.1" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "incentive", rename_all = "snake_case")]
pub enum RebateTerms {
    /// Pay `amount` once, whatever the volume.
    FixedCashAmount { amount: Money },
    /// Pay `percentage` of price for every unit.
    FixedRateRebate { percentage: Rate },
    /// Pay `amount` for every unit.
    AmountPerUom { amount: Money },
    /// Pay `percentage` of the total price.
    PercentageOff { percentage: Rate },
}

impl RebateTerms {
    /// The incentive type these terms belong to.
    pub const fn incentive(&self) -> IncentiveType {
        match self {
            RebateTerms::FixedCashAmount { .. } => IncentiveType::FixedCashAmount,
            RebateTerms::FixedRateRebate { .. } => IncentiveType::FixedRateRebate,
            RebateTerms::AmountPerUom { .. } => IncentiveType::AmountPerUom,
            RebateTerms::PercentageOff { .. } => IncentiveType::PercentageOff,
        }
    }
}

/// A rebate definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rebate {
    /// Business identifier (e.g. `REB001`).
    pub id: String,

    /// Incentive-specific terms; decides which rule applies.
    pub terms: RebateTerms,
}

impl Rebate {
    pub fn new(id: impl Into<String>, terms: RebateTerms) -> Self {
        Rebate {
            id: id.into(),
            terms,
        }
    }

    /// The incentive type that governs this rebate.
    #[inline]
    pub fn incentive(&self) -> IncentiveType {
        self.terms.incentive()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product that rebates can be calculated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Business identifier (e.g. `PROD001`).
    pub id: String,

    /// Incentive types this product accepts.
    #[serde(default)]
    pub supported_incentives: SupportedIncentives,

    /// Unit price.
    pub price: Money,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        supported_incentives: SupportedIncentives,
        price: Money,
    ) -> Self {
        Product {
            id: id.into(),
            supported_incentives,
            price,
        }
    }

    /// Checks whether the product accepts the given incentive type.
    #[inline]
    pub fn supports(&self, incentive: IncentiveType) -> bool {
        self.supported_incentives.contains(incentive)
    }
}

// =============================================================================
// Request / Result
// =============================================================================

/// A request to calculate one rebate for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculateRebateRequest {
    pub rebate_id: String,
    pub product_id: String,

    /// Units of product. Not validated here; volume-scaling rules require
    /// it to be positive.
    pub volume: Decimal,
}

impl CalculateRebateRequest {
    pub fn new(rebate_id: impl Into<String>, product_id: impl Into<String>, volume: Decimal) -> Self {
        CalculateRebateRequest {
            rebate_id: rebate_id.into(),
            product_id: product_id.into(),
            volume,
        }
    }
}

/// Why a rule refused to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Ineligibility {
    /// The product does not list the rebate's incentive type.
    UnsupportedIncentive { incentive: IncentiveType },
    /// The rebate's terms belong to a different rule.
    TermsMismatch {
        expected: IncentiveType,
        actual: IncentiveType,
    },
    /// Rebate amount is zero or negative.
    NonPositiveAmount,
    /// Rebate percentage is zero or negative.
    NonPositivePercentage,
    /// Rebate percentage is above 100%.
    PercentageAboveWhole,
    /// Product price is zero or negative.
    NonPositivePrice,
    /// Requested volume is zero or negative.
    NonPositiveVolume,
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ineligibility::UnsupportedIncentive { incentive } => {
                write!(f, "product does not support {incentive}")
            }
            Ineligibility::TermsMismatch { expected, actual } => {
                write!(f, "rule for {expected} received {actual} terms")
            }
            Ineligibility::NonPositiveAmount => f.write_str("rebate amount must be positive"),
            Ineligibility::NonPositivePercentage => {
                f.write_str("rebate percentage must be positive")
            }
            Ineligibility::PercentageAboveWhole => {
                f.write_str("rebate percentage must not exceed 1")
            }
            Ineligibility::NonPositivePrice => f.write_str("product price must be positive"),
            Ineligibility::NonPositiveVolume => f.write_str("volume must be positive"),
        }
    }
}

/// Why a calculation did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FailureReason {
    RebateNotFound { id: String },
    ProductNotFound { id: String },
    RuleNotFound { incentive: IncentiveType },
    Ineligible { detail: Ineligibility },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::RebateNotFound { id } => write!(f, "rebate {id} not found"),
            FailureReason::ProductNotFound { id } => write!(f, "product {id} not found"),
            FailureReason::RuleNotFound { incentive } => {
                write!(f, "no rule registered for {incentive}")
            }
            FailureReason::Ineligible { detail } => write!(f, "not eligible: {detail}"),
        }
    }
}

/// Outcome of one calculation.
///
/// ## Contract
/// - `success == true`  ⇒ `amount` is `Some`, `failure` is `None`
/// - `success == false` ⇒ `amount` is `None`, `failure` is `Some`
///
/// Only the constructors below build results, so the two can't disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculateRebateResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureReason>,
}

impl CalculateRebateResult {
    pub fn succeeded(amount: Money) -> Self {
        CalculateRebateResult {
            success: true,
            amount: Some(amount),
            failure: None,
        }
    }

    pub fn failed(reason: FailureReason) -> Self {
        CalculateRebateResult {
            success: false,
            amount: None,
            failure: Some(reason),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.success
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incentive_type_round_trips_text() {
        for incentive in IncentiveType::ALL {
            assert_eq!(incentive.as_str().parse::<IncentiveType>().unwrap(), incentive);
        }
        assert_eq!(
            "Percentage-Off".parse::<IncentiveType>().unwrap(),
            IncentiveType::PercentageOff
        );
        assert!(matches!(
            "cashback".parse::<IncentiveType>(),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_supported_incentives_holds_several_types() {
        let supported = SupportedIncentives::none()
            .with(IncentiveType::FixedCashAmount)
            .with(IncentiveType::PercentageOff);

        assert_eq!(supported.len(), 2);
        assert!(supported.contains(IncentiveType::FixedCashAmount));
        assert!(supported.contains(IncentiveType::PercentageOff));
        assert!(!supported.contains(IncentiveType::AmountPerUom));

        assert_eq!(SupportedIncentives::all().len(), 4);
        assert!(SupportedIncentives::none().is_empty());
    }

    #[test]
    fn test_rate_from_bps() {
        assert_eq!(Rate::from_bps(1500).fraction(), Decimal::new(15, 2));
        assert_eq!(Rate::from_bps(10000).fraction(), Decimal::ONE);
        assert!(Rate::from_bps(10000).is_at_most_whole());
        assert!(!Rate::from_bps(10001).is_at_most_whole());
        assert!(!Rate::zero().is_positive());
    }

    #[test]
    fn test_rebate_incentive_follows_terms() {
        let rebate = Rebate::new(
            "REB002",
            RebateTerms::FixedRateRebate {
                percentage: Rate::from_bps(1000),
            },
        );
        assert_eq!(rebate.incentive(), IncentiveType::FixedRateRebate);
    }

    #[test]
    fn test_rebate_json_shape() {
        let json = r#"{
            "id": "REB004",
            "terms": { "incentive": "percentage_off", "percentage": "0.15" }
        }"#;
        let rebate: Rebate = serde_json::from_str(json).unwrap();

        assert_eq!(rebate.id, "REB004");
        assert_eq!(
            rebate.terms,
            RebateTerms::PercentageOff {
                percentage: Rate::new(Decimal::new(15, 2))
            }
        );
    }

    #[test]
    fn test_product_json_shape() {
        let json = r#"{
            "id": "PROD001",
            "supported_incentives": ["fixed_cash_amount", "amount_per_uom"],
            "price": "50.00"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert!(product.supports(IncentiveType::AmountPerUom));
        assert!(!product.supports(IncentiveType::PercentageOff));
        assert_eq!(product.price, Money::from_major(50));
    }

    #[test]
    fn test_result_constructors_keep_fields_consistent() {
        let ok = CalculateRebateResult::succeeded(Money::from_major(30));
        assert!(ok.is_success());
        assert_eq!(ok.amount, Some(Money::from_major(30)));
        assert!(ok.failure.is_none());

        let failed = CalculateRebateResult::failed(FailureReason::Ineligible {
            detail: Ineligibility::NonPositiveVolume,
        });
        assert!(!failed.is_success());
        assert!(failed.amount.is_none());
        assert_eq!(
            failed.failure.unwrap().to_string(),
            "not eligible: volume must be positive"
        );
    }
}
