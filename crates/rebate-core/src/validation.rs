//! # Validation Module
//!
//! Input validation for requests and catalog data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI (clap)                                                   │
//! │  └── Type validation (volume parses as a decimal)                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Requests: identifiers present                                     │
//! │  └── Catalogs: identifiers, non-negative prices, amounts and rates     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Rule eligibility (rules module)                              │
//! │  └── Business applicability: positive amounts, volume, rate ≤ 1        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation here only rejects data that is *malformed*. Data that is
//! well-formed but does not qualify for a rebate (zero volume, an
//! unsupported incentive) is the rules' business and produces a failed
//! result instead of an error.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{CalculateRebateRequest, Product, Rebate, RebateTerms};
use crate::MAX_IDENTIFIER_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a rebate or product identifier.
///
/// ## Rules
/// - Must not be blank
/// - No leading or trailing whitespace (lookups are exact)
/// - At most [`MAX_IDENTIFIER_LEN`] characters
///
/// ## Example
/// ```rust
/// use rebate_core::validation::validate_identifier;
///
/// assert!(validate_identifier("rebate identifier", "REB001").is_ok());
/// assert!(validate_identifier("rebate identifier", "   ").is_err());
/// assert!(validate_identifier("rebate identifier", " REB001").is_err());
/// ```
pub fn validate_identifier(field: &str, value: &str) -> ValidationResult<()> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if trimmed.len() != value.len() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "leading or trailing whitespace".to_string(),
        });
    }

    if value.chars().count() > MAX_IDENTIFIER_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_IDENTIFIER_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates that a monetary value is not negative.
///
/// Zero is allowed: a free product or a zero-value rebate is well-formed,
/// it simply never qualifies.
pub fn validate_non_negative_money(field: &str, value: Money) -> ValidationResult<()> {
    if value.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a calculation request before the engine touches any store.
///
/// ## Rules
/// - Rebate and product identifiers present
/// - Volume is NOT checked (rules decide)
pub fn validate_request(request: &CalculateRebateRequest) -> ValidationResult<()> {
    validate_identifier("rebate identifier", &request.rebate_id)?;
    validate_identifier("product identifier", &request.product_id)?;
    Ok(())
}

/// Validates a rebate definition loaded from a catalog.
pub fn validate_rebate(rebate: &Rebate) -> ValidationResult<()> {
    validate_identifier("rebate identifier", &rebate.id)?;

    match rebate.terms {
        RebateTerms::FixedCashAmount { amount } | RebateTerms::AmountPerUom { amount } => {
            validate_non_negative_money("rebate amount", amount)
        }
        RebateTerms::FixedRateRebate { percentage } | RebateTerms::PercentageOff { percentage } => {
            if percentage.fraction() < Decimal::ZERO {
                return Err(ValidationError::MustNotBeNegative {
                    field: "rebate percentage".to_string(),
                });
            }
            Ok(())
        }
    }
}

/// Validates a product loaded from a catalog.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_identifier("product identifier", &product.id)?;
    validate_non_negative_money("price", product.price)
}

// =============================================================================
// Unit Tests
// =============================================================================
