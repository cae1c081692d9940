//! CLI handlers for `dietmate recipes` subcommands.
//!
//! Implements:
//! - `dietmate recipes load-samples` -- store the built-in sample catalog
//! - `dietmate recipes import <file>` -- validate and store a recipe file
//! - `dietmate recipes list`          -- print the catalog as a table

use std::path::Path;

use anyhow::{Context, Result};

use dietmate_core::Session;
use dietmate_core::catalog::parse_catalog_json;
use dietmate_core::plan::candidate_recipes;
use dietmate_store::JsonStore;
use dietmate_store::models::{DietType, MealSlot, Recipe};

use crate::RecipeCommands;
use crate::plan_cmds::prerequisite_hint;

/// Dispatch a `RecipeCommands` variant to the appropriate handler.
pub fn run_recipe_command(
    command: RecipeCommands,
    session: &mut Session,
    store: &JsonStore,
) -> Result<()> {
    match command {
        RecipeCommands::LoadSamples => cmd_load_samples(session, store),
        RecipeCommands::Import { file } => cmd_import(session, store, &file),
        RecipeCommands::List {
            meal,
            diet,
            eligible,
        } => cmd_list(session, meal, diet, eligible),
    }
}

fn cmd_load_samples(session: &mut Session, store: &JsonStore) -> Result<()> {
    let count = session.load_sample_recipes(store)?;
    println!(
        "Loaded {count} sample recipes into {}",
        store.config().recipes_path().display()
    );
    Ok(())
}

fn cmd_import(session: &mut Session, store: &JsonStore, file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read recipe file: {}", file.display()))?;
    let recipes = parse_catalog_json(&content)
        .with_context(|| format!("failed to parse recipe file: {}", file.display()))?;

    let count = session.replace_catalog(store, recipes)?;
    println!("Imported {count} recipes from {}", file.display());
    Ok(())
}

fn cmd_list(
    session: &Session,
    meal: Option<MealSlot>,
    diet: Option<DietType>,
    eligible: bool,
) -> Result<()> {
    if session.catalog.is_empty() {
        println!("No recipes loaded. Use `dietmate recipes load-samples` or `dietmate recipes import <file>`.");
        return Ok(());
    }

    let mut recipes: Vec<&Recipe> = if eligible {
        let profile = session.profile.as_ref().with_context(|| {
            prerequisite_hint(dietmate_core::Prerequisite::Profile)
        })?;
        candidate_recipes(profile, &session.catalog)
    } else {
        session.catalog.iter().collect()
    };
    recipes.retain(|r| meal.is_none_or(|m| r.meal == m) && diet.is_none_or(|d| r.diet == d));

    if recipes.is_empty() {
        println!("No recipes match.");
        return Ok(());
    }

    print!("{}", format_recipe_table(&recipes));
    Ok(())
}

/// Render recipes as an aligned table with a header row.
fn format_recipe_table(recipes: &[&Recipe]) -> String {
    use std::fmt::Write;

    let name_w = recipes.iter().map(|r| r.name.len()).max().unwrap_or(4).max(4);
    let meal_w = 9;
    let diet_w = 10;
    let kcal_w = 5;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_w$}  {:<meal_w$}  {:<diet_w$}  {:>kcal_w$}  P/C/F (g)  INGREDIENTS",
        "NAME", "MEAL", "DIET", "KCAL",
    );
    for r in recipes {
        let macros = format!("{}/{}/{}", r.protein, r.carbs, r.fat);
        let _ = writeln!(
            out,
            "{:<name_w$}  {:<meal_w$}  {:<diet_w$}  {:>kcal_w$}  {:<9}  {}",
            r.name,
            r.meal.to_string(),
            r.diet.to_string(),
            r.calories,
            macros,
            r.ingredients.join(", "),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_header_and_one_row_per_recipe() {
        let catalog = dietmate_core::catalog::sample_recipes().unwrap();
        let refs: Vec<&Recipe> = catalog.iter().take(2).collect();
        let table = format_recipe_table(&refs);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("NAME"));
        assert!(lines[1].starts_with("Oatmeal Bowl"));
        assert!(lines[1].contains("Breakfast"));
        assert!(lines[1].contains("320"));
        assert!(lines[1].contains("8/45/9"));
        assert!(lines[2].contains("Chicken, Lettuce, Olive oil"));
    }
}
