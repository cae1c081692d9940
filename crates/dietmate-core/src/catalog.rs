//! Recipe catalog: the built-in samples and validation of user recipe files.
//!
//! A recipe file is a JSON array of recipe objects. [`parse_catalog_json`]
//! checks that:
//! - The catalog is not empty.
//! - Every recipe has a non-blank name and at least one ingredient.
//! - Recipe names are unique.

use std::collections::HashSet;

use thiserror::Error;

use dietmate_store::models::Recipe;

/// Errors that can occur while parsing and validating a recipe catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog must contain at least one recipe")]
    Empty,

    #[error("recipe #{index} has a blank name")]
    BlankName { index: usize },

    #[error("duplicate recipe name: {0:?}")]
    DuplicateName(String),

    #[error("recipe {0:?} lists no ingredients")]
    NoIngredients(String),
}

/// The embedded sample catalog.
static SAMPLE_RECIPES_JSON: &str = include_str!("sample_recipes.json");

/// The seven built-in sample recipes.
pub fn sample_recipes() -> Result<Vec<Recipe>, CatalogError> {
    parse_catalog_json(SAMPLE_RECIPES_JSON)
}

/// Parse and validate a recipe catalog from JSON text.
pub fn parse_catalog_json(content: &str) -> Result<Vec<Recipe>, CatalogError> {
    let recipes: Vec<Recipe> = serde_json::from_str(content)?;
    validate(&recipes)?;
    Ok(recipes)
}

/// Validate an already-deserialized catalog.
pub fn validate(recipes: &[Recipe]) -> Result<(), CatalogError> {
    if recipes.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for (index, recipe) in recipes.iter().enumerate() {
        if recipe.name.trim().is_empty() {
            return Err(CatalogError::BlankName { index });
        }
        if !seen.insert(recipe.name.as_str()) {
            return Err(CatalogError::DuplicateName(recipe.name.clone()));
        }
        if recipe.ingredients.iter().all(|i| i.trim().is_empty()) {
            return Err(CatalogError::NoIngredients(recipe.name.clone()));
        }
    }

    Ok(())
}
