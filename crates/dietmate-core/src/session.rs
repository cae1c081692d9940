//! Session state: the profile, the catalog and the current plan.
//!
//! A [`Session`] is loaded from a [`Store`] once, changed only through the
//! methods below, and written back through the same store. Nothing here
//! holds global state; the caller owns the session and the store.

use chrono::Utc;
use rand::Rng;
use thiserror::Error;
use uuid::Uuid;

use dietmate_store::models::{PlanRecord, Profile, Recipe};
use dietmate_store::{Store, StoreError};

use crate::calories::aggregate_calories;
use crate::catalog::{self, CatalogError};
use crate::plan::{PlanError, generate_plan};
use crate::shopping::shopping_list;

/// What must be in place before a plan can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prerequisite {
    Profile,
    Recipes,
}

impl std::fmt::Display for Prerequisite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Profile => f.write_str("no profile saved"),
            Self::Recipes => f.write_str("no recipes loaded"),
        }
    }
}

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("missing prerequisite: {0}")]
    MissingPrerequisite(Prerequisite),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("no meal plan has been generated yet")]
    NoPlan,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Explicit session state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub profile: Option<Profile>,
    pub catalog: Vec<Recipe>,
    pub current_plan: Option<PlanRecord>,
}

impl Session {
    /// Load profile, catalog and current plan from `store`.
    ///
    /// The current plan is derived data: an unreadable plan file is logged
    /// and treated as absent, and the next generated plan replaces it.
    pub fn load(store: &impl Store) -> Result<Self, SessionError> {
        let profile = store.load_profile()?;
        let catalog = store.load_recipes()?;
        let current_plan = store.load_plan().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring unreadable current plan");
            None
        });

        tracing::debug!(
            has_profile = profile.is_some(),
            recipes = catalog.len(),
            has_plan = current_plan.is_some(),
            "session loaded"
        );

        Ok(Self {
            profile,
            catalog,
            current_plan,
        })
    }

    /// Persist `profile` whole, then make it the session profile.
    pub fn save_profile(&mut self, store: &impl Store, profile: Profile) -> Result<(), SessionError> {
        store.save_profile(&profile)?;
        tracing::info!(name = %profile.name, diet = %profile.diet_type, "profile saved");
        self.profile = Some(profile);
        Ok(())
    }

    /// Write the built-in sample recipes to the store and use them.
    ///
    /// Returns the number of recipes loaded.
    pub fn load_sample_recipes(&mut self, store: &impl Store) -> Result<usize, SessionError> {
        let recipes = catalog::sample_recipes()?;
        self.replace_catalog(store, recipes)
    }

    /// Validate `recipes`, persist them, and make them the session catalog.
    pub fn replace_catalog(
        &mut self,
        store: &impl Store,
        recipes: Vec<Recipe>,
    ) -> Result<usize, SessionError> {
        catalog::validate(&recipes)?;
        store.save_recipes(&recipes)?;
        tracing::info!(count = recipes.len(), "recipe catalog replaced");
        self.catalog = recipes;
        Ok(self.catalog.len())
    }

    /// Generate a new plan and make it current.
    ///
    /// Fails with [`SessionError::MissingPrerequisite`] when no profile is
    /// saved or the catalog is empty, and with [`SessionError::Plan`] when
    /// the filters leave nothing. On failure the previous plan is kept.
    pub fn generate_plan<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&PlanRecord, SessionError> {
        let profile = self
            .profile
            .as_ref()
            .ok_or(SessionError::MissingPrerequisite(Prerequisite::Profile))?;
        if self.catalog.is_empty() {
            return Err(SessionError::MissingPrerequisite(Prerequisite::Recipes));
        }

        let plan = generate_plan(profile, &self.catalog, rng)?;
        let record = PlanRecord {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            profile_name: profile.name.clone(),
            plan,
        };
        tracing::info!(plan_id = %record.id, "meal plan generated");

        Ok(self.current_plan.insert(record))
    }

    /// Persist the current plan.
    pub fn save_plan(&self, store: &impl Store) -> Result<(), SessionError> {
        let record = self.current_plan()?;
        store.save_plan(record)?;
        Ok(())
    }

    pub fn current_plan(&self) -> Result<&PlanRecord, SessionError> {
        self.current_plan.as_ref().ok_or(SessionError::NoPlan)
    }

    /// Shopping list for the current plan.
    pub fn shopping_list(&self) -> Result<Vec<String>, SessionError> {
        Ok(shopping_list(&self.current_plan()?.plan))
    }

    /// `(day label, calories)` series for the current plan.
    pub fn calorie_series(&self) -> Result<Vec<(String, u32)>, SessionError> {
        Ok(aggregate_calories(&self.current_plan()?.plan))
    }
}
