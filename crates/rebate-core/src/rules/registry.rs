//! Maps each incentive type to the rule that calculates it.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::{
    AmountPerUomRule, FixedCashAmountRule, FixedRateRebateRule, IncentiveRule, PercentageOffRule,
};
use crate::error::RuleNotFound;
use crate::types::IncentiveType;

/// Lookup table from [`IncentiveType`] to [`IncentiveRule`].
///
/// ## Construction
/// ```text
/// RuleRegistry::standard()          → all four built-in rules
/// RuleRegistry::empty().with_rule() → only what you add
/// ```
///
/// A registry is immutable once built and cheap to clone; engines running
/// on different threads can share one.
#[derive(Clone)]
pub struct RuleRegistry {
    rules: BTreeMap<IncentiveType, Arc<dyn IncentiveRule>>,
}

impl RuleRegistry {
    /// Registry holding one rule for every [`IncentiveType`].
    pub fn standard() -> Self {
        RuleRegistry::empty()
            .with_rule(FixedCashAmountRule)
            .with_rule(FixedRateRebateRule)
            .with_rule(AmountPerUomRule)
            .with_rule(PercentageOffRule)
    }

    /// Registry with no rules. Every lookup fails until rules are added.
    pub fn empty() -> Self {
        RuleRegistry {
            rules: BTreeMap::new(),
        }
    }

    /// Adds a rule, replacing any rule already registered for its type.
    pub fn with_rule(mut self, rule: impl IncentiveRule + 'static) -> Self {
        self.rules.insert(rule.incentive_type(), Arc::new(rule));
        self
    }

    /// Returns the rule registered for `incentive`.
    pub fn resolve(&self, incentive: IncentiveType) -> Result<&dyn IncentiveRule, RuleNotFound> {
        self.rules
            .get(&incentive)
            .map(|rule| &**rule)
            .ok_or(RuleNotFound(incentive))
    }

    /// Incentive types that have a rule, in declaration order.
    pub fn incentive_types(&self) -> impl Iterator<Item = IncentiveType> + '_ {
        self.rules.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        RuleRegistry::standard()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.rules.keys()).finish()
    }
}
