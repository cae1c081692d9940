//! The `Store` trait -- the file-system capability a session works through.

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::models::{PlanRecord, Profile, Recipe};
use crate::queries::{plans, profile, recipes};

/// Persistence for the three data records.
///
/// Loads report "nothing saved" as `None` (or an empty catalog) rather
/// than an error. Saves overwrite the whole record.
pub trait Store {
    fn load_profile(&self) -> Result<Option<Profile>, StoreError>;

    fn save_profile(&self, profile: &Profile) -> Result<(), StoreError>;

    fn load_recipes(&self) -> Result<Vec<Recipe>, StoreError>;

    fn save_recipes(&self, recipes: &[Recipe]) -> Result<(), StoreError>;

    fn load_plan(&self) -> Result<Option<PlanRecord>, StoreError>;

    fn save_plan(&self, record: &PlanRecord) -> Result<(), StoreError>;
}

/// [`Store`] backed by JSON files in a data directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    config: StoreConfig,
}

impl JsonStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl Store for JsonStore {
    fn load_profile(&self) -> Result<Option<Profile>, StoreError> {
        profile::load_profile(&self.config)
    }

    fn save_profile(&self, p: &Profile) -> Result<(), StoreError> {
        profile::save_profile(&self.config, p)
    }

    fn load_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        recipes::load_recipes(&self.config)
    }

    fn save_recipes(&self, r: &[Recipe]) -> Result<(), StoreError> {
        recipes::save_recipes(&self.config, r)
    }

    fn load_plan(&self) -> Result<Option<PlanRecord>, StoreError> {
        plans::load_current_plan(&self.config)
    }

    fn save_plan(&self, record: &PlanRecord) -> Result<(), StoreError> {
        plans::save_current_plan(&self.config, record)
    }
}
