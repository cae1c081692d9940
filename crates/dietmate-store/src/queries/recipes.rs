//! Queries for `recipes.json`.

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::models::Recipe;

use super::{read_json, write_json};

/// Load the recipe catalog. A missing file is an empty catalog.
pub fn load_recipes(config: &StoreConfig) -> Result<Vec<Recipe>, StoreError> {
    let recipes: Option<Vec<Recipe>> = read_json(&config.recipes_path())?;
    Ok(recipes.unwrap_or_default())
}

/// Overwrite the recipes file with `recipes`.
pub fn save_recipes(config: &StoreConfig, recipes: &[Recipe]) -> Result<(), StoreError> {
    write_json(&config.recipes_path(), recipes, "recipes")
}
