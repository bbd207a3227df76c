//! # Rebate Repository
//!
//! Rebate lookup and the write side of the calculation ledger.

use std::sync::Arc;

use chrono::Utc;
use rebate_core::{Money, Rebate, RebateStore, StoreResult};
use tracing::{debug, info};
use uuid::Uuid;

use super::{read, write, CalculationRecord, StoreState};
use crate::error::{DbError, DbResult};

/// Repository for rebates.
///
/// ## Usage
/// ```rust
/// use rebate_db::DataStore;
///
/// let store = DataStore::sample();
/// let rebate = store.rebates().get_by_id("REB001").unwrap();
/// assert_eq!(rebate.id, "REB001");
/// ```
#[derive(Debug, Clone)]
pub struct RebateRepository {
    state: Arc<StoreState>,
}

impl RebateRepository {
    pub(crate) fn new(state: Arc<StoreState>) -> Self {
        RebateRepository { state }
    }

    /// Gets a rebate by its identifier.
    pub fn get_by_id(&self, id: &str) -> DbResult<Rebate> {
        let rebates = read(&self.state.rebates, "rebates")?;
        rebates
            .get(id)
            .cloned()
            .ok_or_else(|| DbError::not_found("Rebate", id))
    }

    /// Adds a rebate. Fails if the identifier is taken.
    pub fn insert(&self, rebate: Rebate) -> DbResult<()> {
        rebate_core::validation::validate_rebate(&rebate)?;

        debug!(id = %rebate.id, incentive = %rebate.incentive(), "Inserting rebate");

        let mut rebates = write(&self.state.rebates, "rebates")?;
        if rebates.contains_key(&rebate.id) {
            return Err(DbError::duplicate("rebate id", rebate.id));
        }
        rebates.insert(rebate.id.clone(), rebate);
        Ok(())
    }

    /// Lists all rebates, ordered by identifier.
    pub fn list(&self) -> DbResult<Vec<Rebate>> {
        let rebates = read(&self.state.rebates, "rebates")?;
        let mut all: Vec<Rebate> = rebates.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    /// Appends a calculation to the ledger.
    pub fn record_calculation(&self, rebate: &Rebate, amount: Money) -> DbResult<CalculationRecord> {
        let record = CalculationRecord {
            id: Uuid::new_v4(),
            rebate_id: rebate.id.clone(),
            incentive: rebate.incentive(),
            amount,
            recorded_at: Utc::now(),
        };

        write(&self.state.ledger, "ledger")?.push(record.clone());

        info!(
            record_id = %record.id,
            rebate_id = %record.rebate_id,
            incentive = %record.incentive,
            amount = %record.amount,
            "Calculation recorded"
        );
        Ok(record)
    }
}

impl RebateStore for RebateRepository {
    fn get_rebate(&self, id: &str) -> StoreResult<Rebate> {
        Ok(self.get_by_id(id)?)
    }

    fn store_calculation_result(&self, rebate: &Rebate, amount: Money) -> StoreResult<()> {
        self.record_calculation(rebate, amount)?;
        Ok(())
    }
}
