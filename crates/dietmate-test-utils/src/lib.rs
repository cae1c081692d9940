//! Shared test utilities for dietmate integration tests.
//!
//! Provides an isolated data directory per test (backed by a [`TempDir`]
//! that is removed on drop) plus small builders for profiles and recipes.

use tempfile::TempDir;

use dietmate_store::models::{DietType, MealSlot, Profile, Recipe};
use dietmate_store::{JsonStore, StoreConfig};

/// A [`JsonStore`] rooted in its own temporary directory.
///
/// The directory lives as long as this value.
pub struct TestStore {
    _dir: TempDir,
    pub store: JsonStore,
}

impl TestStore {
    pub fn config(&self) -> &StoreConfig {
        self.store.config()
    }
}

/// Create a fresh, empty data directory with a store pointing at it.
///
/// The store writes into a `data/` subdirectory that does not exist yet, so
/// tests also cover directory creation on first save.
pub fn temp_store() -> TestStore {
    let dir = TempDir::new().expect("failed to create temp dir");
    let store = JsonStore::new(StoreConfig::new(dir.path().join("data")));
    TestStore { _dir: dir, store }
}

/// A profile with the given diet and allergy list; other fields filled in.
pub fn profile(diet: DietType, allergies: &str) -> Profile {
    Profile {
        name: "Test User".to_owned(),
        age: "30".to_owned(),
        weight: "70".to_owned(),
        height: "175".to_owned(),
        diet_type: diet,
        allergies: allergies.to_owned(),
        ..Profile::default()
    }
}

/// A recipe with zero macros; enough for filtering and aggregation tests.
pub fn recipe(
    name: &str,
    meal: MealSlot,
    diet: DietType,
    calories: u32,
    ingredients: &[&str],
) -> Recipe {
    Recipe {
        name: name.to_owned(),
        meal,
        diet,
        calories,
        protein: 0,
        carbs: 0,
        fat: 0,
        ingredients: ingredients.iter().map(|s| (*s).to_owned()).collect(),
    }
}
