//! # Calculation Ledger
//!
//! Read access to the calculations recorded by [`super::RebateRepository`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rebate_core::{IncentiveType, Money};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{read, StoreState};
use crate::error::{DbError, DbResult};

/// One successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: Uuid,
    pub rebate_id: String,
    pub incentive: IncentiveType,
    pub amount: Money,
    pub recorded_at: DateTime<Utc>,
}

/// Read-only view of the ledger.
#[derive(Debug, Clone)]
pub struct CalculationRepository {
    state: Arc<StoreState>,
}

impl CalculationRepository {
    pub(crate) fn new(state: Arc<StoreState>) -> Self {
        CalculationRepository { state }
    }

    /// All records, oldest first.
    pub fn list(&self) -> DbResult<Vec<CalculationRecord>> {
        Ok(read(&self.state.ledger, "ledger")?.clone())
    }

    /// Records for one rebate, oldest first.
    pub fn for_rebate(&self, rebate_id: &str) -> DbResult<Vec<CalculationRecord>> {
        let ledger = read(&self.state.ledger, "ledger")?;
        Ok(ledger
            .iter()
            .filter(|record| record.rebate_id == rebate_id)
            .cloned()
            .collect())
    }

    pub fn count(&self) -> DbResult<usize> {
        Ok(read(&self.state.ledger, "ledger")?.len())
    }

    /// Sum of every recorded amount.
    ///
    /// Fails with [`DbError::TotalOverflow`] rather than panicking when the
    /// sum leaves the decimal range.
    pub fn total(&self) -> DbResult<Money> {
        let ledger = read(&self.state.ledger, "ledger")?;
        ledger
            .iter()
            .try_fold(Money::zero(), |sum, record| sum.checked_add(record.amount))
            .ok_or(DbError::TotalOverflow {
                records: ledger.len(),
            })
    }
}
