//! Plan generation: fill a 7-day by 4-slot grid with random candidates.
//!
//! For every (day, slot) pair a recipe is drawn uniformly from the
//! candidates tagged with that slot. When no candidate carries the tag the
//! draw falls back to the whole candidate set, so a Dinner recipe may be
//! served at Breakfast. Draws are independent; repeats are allowed.
//!
//! This module is pure: the random source is passed in.

use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

use dietmate_store::models::{
    DAYS_PER_PLAN, DayPlan, DietType, MealPlan, MealSlot, PlannedMeal, Profile, Recipe,
};

use super::filter::candidate_recipes;

/// Errors from plan generation. Either way no plan is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("recipe catalog is empty")]
    EmptyCatalog,

    #[error("no matching recipes found for diet {diet:?} with allergies {allergies:?}")]
    NoMatchingRecipes {
        diet: DietType,
        allergies: Vec<String>,
    },
}

/// Generate a plan for `profile` from `catalog`.
pub fn generate_plan<R: Rng + ?Sized>(
    profile: &Profile,
    catalog: &[Recipe],
    rng: &mut R,
) -> Result<MealPlan, PlanError> {
    if catalog.is_empty() {
        return Err(PlanError::EmptyCatalog);
    }

    let no_match = || PlanError::NoMatchingRecipes {
        diet: profile.diet_type,
        allergies: profile.allergy_tokens(),
    };

    let candidates = candidate_recipes(profile, catalog);
    if candidates.is_empty() {
        return Err(no_match());
    }

    tracing::debug!(
        catalog = catalog.len(),
        candidates = candidates.len(),
        diet = %profile.diet_type,
        "filtered recipe candidates"
    );

    // Candidate pool per slot, built once.
    let pools: Vec<(MealSlot, Vec<&Recipe>)> = MealSlot::ALL
        .iter()
        .map(|&slot| {
            let tagged: Vec<&Recipe> = candidates
                .iter()
                .copied()
                .filter(|r| r.meal == slot)
                .collect();
            if tagged.is_empty() {
                tracing::debug!(%slot, "no recipe tagged for slot, drawing from all candidates");
                (slot, candidates.clone())
            } else {
                (slot, tagged)
            }
        })
        .collect();

    let mut days = Vec::with_capacity(usize::from(DAYS_PER_PLAN));
    for day in 1..=DAYS_PER_PLAN {
        let mut meals = Vec::with_capacity(pools.len());
        for (slot, pool) in &pools {
            // Each pool is the tagged subset or the non-empty candidate set.
            let recipe = pool.choose(rng).ok_or_else(no_match)?;
            meals.push(PlannedMeal {
                slot: *slot,
                recipe: (*recipe).clone(),
            });
        }
        days.push(DayPlan { day, meals });
    }

    Ok(MealPlan { days })
}
