//! # Rebate Engine
//!
//! Orchestrates a single rebate calculation.
//!
//! ## Flow
//! ```text
//! request
//!   │
//!   ├─ validate identifiers ──────────────── blank?      → Err(InvalidRequest)
//!   ├─ RebateStore::get_rebate ───────────── not found?  → failed(RebateNotFound)
//!   ├─ ProductStore::get_product ─────────── not found?  → failed(ProductNotFound)
//!   ├─ RuleRegistry::resolve(incentive) ──── missing?    → failed(RuleNotFound)
//!   ├─ rule.check_eligibility ────────────── refused?    → failed(Ineligible)
//!   ├─ rule.compute_amount
//!   ├─ RebateStore::store_calculation_result   (exactly once, success only)
//!   ▼
//! succeeded(amount)
//! ```
//!
//! Business outcomes (missing entities, missing rule, ineligibility) come
//! back as `Ok(CalculateRebateResult)` with `success == false`. Only caller
//! bugs and infrastructure failures are returned as `Err`.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{CoreError, CoreResult, StoreError};
use crate::money::Money;
use crate::rules::RuleRegistry;
use crate::store::{ProductStore, RebateStore};
use crate::types::{CalculateRebateRequest, CalculateRebateResult, FailureReason};
use crate::validation::validate_request;

/// Calculates rebates against a pair of data providers.
///
/// The engine holds no mutable state; `calculate` takes `&self` and may be
/// called concurrently when the stores allow it.
pub struct RebateEngine<R, P> {
    rebates: Arc<R>,
    products: Arc<P>,
    registry: RuleRegistry,
}

impl<R, P> RebateEngine<R, P>
where
    R: RebateStore,
    P: ProductStore,
{
    /// Creates an engine using every built-in rule.
    pub fn new(rebates: Arc<R>, products: Arc<P>) -> Self {
        Self::with_registry(rebates, products, RuleRegistry::standard())
    }

    /// Creates an engine with a caller-supplied rule set.
    pub fn with_registry(rebates: Arc<R>, products: Arc<P>, registry: RuleRegistry) -> Self {
        RebateEngine {
            rebates,
            products,
            registry,
        }
    }

    /// Rules this engine dispatches to.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Runs one calculation.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidRequest`] for a blank or oversized identifier
    /// - [`CoreError::Store`] when a provider fails for a reason other than
    ///   a missing rebate or product, or when storing the result fails
    /// - [`CoreError::AmountOverflow`] when the amount does not fit a decimal
    pub fn calculate(&self, request: &CalculateRebateRequest) -> CoreResult<CalculateRebateResult> {
        validate_request(request).map_err(CoreError::InvalidRequest)?;

        debug!(
            rebate_id = %request.rebate_id,
            product_id = %request.product_id,
            volume = %request.volume,
            "Calculating rebate"
        );

        let rebate = match found(self.rebates.get_rebate(&request.rebate_id))? {
            Some(rebate) => rebate,
            None => {
                return Ok(self.fail(FailureReason::RebateNotFound {
                    id: request.rebate_id.clone(),
                }))
            }
        };

        let product = match found(self.products.get_product(&request.product_id))? {
            Some(product) => product,
            None => {
                return Ok(self.fail(FailureReason::ProductNotFound {
                    id: request.product_id.clone(),
                }))
            }
        };

        let incentive = rebate.incentive();
        let rule = match self.registry.resolve(incentive) {
            Ok(rule) => rule,
            Err(missing) => {
                return Ok(self.fail(FailureReason::RuleNotFound {
                    incentive: missing.0,
                }))
            }
        };

        if let Err(detail) = rule.check_eligibility(&rebate, &product, request) {
            return Ok(self.fail(FailureReason::Ineligible { detail }));
        }

        let amount: Money = rule.compute_amount(&rebate, &product, request)?;
        self.rebates.store_calculation_result(&rebate, amount)?;

        info!(
            rebate_id = %rebate.id,
            product_id = %product.id,
            incentive = %incentive,
            amount = %amount,
            "Rebate calculated"
        );

        Ok(CalculateRebateResult::succeeded(amount))
    }

    fn fail(&self, reason: FailureReason) -> CalculateRebateResult {
        debug!(reason = %reason, "Rebate calculation failed");
        CalculateRebateResult::failed(reason)
    }
}

/// Turns a provider NotFound into `None`; other store errors propagate.
fn found<T>(result: Result<T, StoreError>) -> Result<Option<T>, StoreError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
