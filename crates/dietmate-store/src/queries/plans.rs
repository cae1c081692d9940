//! Queries for `plans.json`, which holds only the current plan.

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::models::PlanRecord;

use super::{read_json, write_json};

/// Load the current plan, or `None` if no plan has been saved.
pub fn load_current_plan(config: &StoreConfig) -> Result<Option<PlanRecord>, StoreError> {
    read_json(&config.plans_path())
}

/// Replace the current plan.
pub fn save_current_plan(config: &StoreConfig, record: &PlanRecord) -> Result<(), StoreError> {
    write_json(&config.plans_path(), record, "plan")
}
