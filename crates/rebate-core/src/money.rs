//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    50.00 × 0.1 × 2 = 10.000000000000002                                │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal::Decimal (base-10, 28 digits)              │
//! │    50.00 × 0.1 × 2 = 10.000  ✅ exact                                   │
//! │                                                                         │
//! │  Rates like 0.15 and fractional volumes like 2.5 units stay exact,     │
//! │  which integer cents alone cannot express.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rebate_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let price = Money::from_cents(1099); // 10.99
//!
//! let total = price.checked_mul(Decimal::new(3, 0)).unwrap();
//! assert_eq!(total, Money::from_cents(3297));
//!
//! // NEVER do this:
//! // let bad = Money::from_f64(10.99); // NO SUCH METHOD EXISTS!
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::Rate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value held as an exact decimal.
///
/// ## Design Decisions
/// - **Decimal**: exact base-10 arithmetic, no rounding drift
/// - **Single field tuple struct**: zero-cost wrapper; serializes as the bare
///   decimal (a string in JSON: `"50.00"`)
/// - **Checked arithmetic only**: overflow becomes `None`, never a panic.
///   No `+`/`-` operators; `Decimal`'s operators panic on overflow.
///
/// ## Where Money is Used
/// ```text
/// Product.price ──┬──► FixedRateRebate  (price × rate × volume)
///                 └──► PercentageOff    ((price × volume) × rate)
///
/// Rebate amount ──┬──► FixedCashAmount  (amount)
///                 └──► AmountPerUom     (amount × volume)
///
/// Every computed rebate flows to RebateStore::store_calculation_result
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Creates Money from an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates Money from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use rebate_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // 10.99
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Creates Money from whole currency units.
    #[inline]
    pub fn from_major(major: i64) -> Self {
        Money(Decimal::from(major))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is strictly greater than zero.
    ///
    /// ## Note
    /// `Decimal::is_sign_positive` is true for zero, so compare instead.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Adds two amounts.
    ///
    /// Returns `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use rebate_core::money::Money;
    ///
    /// let sum = Money::from_cents(1000).checked_add(Money::from_cents(500));
    /// assert_eq!(sum, Some(Money::from_cents(1500)));
    /// ```
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiplies by a decimal factor (a volume, a rate).
    ///
    /// Returns `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use rebate_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let per_unit = Money::from_major(25);
    /// let total = per_unit.checked_mul(Decimal::new(3, 0)).unwrap();
    /// assert_eq!(total, Money::from_major(75));
    /// ```
    #[inline]
    pub fn checked_mul(&self, factor: Decimal) -> Option<Self> {
        self.0.checked_mul(factor).map(Money)
    }

    /// Applies a rate to this amount (`amount × rate`).
    ///
    /// ## Example
    /// ```rust
    /// use rebate_core::money::Money;
    /// use rebate_core::types::Rate;
    ///
    /// let line_total = Money::from_major(200);
    /// let rebate = line_total.apply_rate(Rate::from_bps(1500)).unwrap();
    /// assert_eq!(rebate, Money::from_major(30));
    /// ```
    #[inline]
    pub fn apply_rate(&self, rate: Rate) -> Option<Self> {
        self.checked_mul(rate.fraction())
    }

    /// Rounds to whole cents using Bankers Rounding (round half to even).
    ///
    /// Calculated amounts keep full precision; rounding is the caller's
    /// choice at the point of payout.
    ///
    /// ## Example
    /// ```rust
    /// use rebate_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Money::new(Decimal::new(10125, 3)).round_to_cents(), Money::from_cents(1012));
    /// assert_eq!(Money::new(Decimal::new(10135, 3)).round_to_cents(), Money::from_cents(1014));
    /// ```
    #[inline]
    pub fn round_to_cents(&self) -> Self {
        Money(self.0.round_dp(2))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the normalized decimal (`30`, `10.5`).
///
/// ## Note
/// This is for logs and plain-text output. Currency symbols and locale
/// formatting belong to whatever presents the value.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Money)
            .map_err(|e| ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: e.to_string(),
            })
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
