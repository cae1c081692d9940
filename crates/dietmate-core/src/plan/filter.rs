//! Candidate selection: which recipes a profile may be served.
//!
//! Two filters run in order:
//! 1. Diet: keep recipes the profile's diet accepts (see
//!    [`DietType::accepts`]); omnivore keeps everything.
//! 2. Allergies: drop recipes whose joined, lower-cased ingredient text
//!    contains any allergy token as a substring. The match is coarse on
//!    purpose: `nut` also rejects `Coconut milk`.

use dietmate_store::models::{DietType, Profile, Recipe};

/// Recipes accepted by `diet`.
pub fn filter_by_diet(recipes: &[Recipe], diet: DietType) -> Vec<&Recipe> {
    recipes.iter().filter(|r| diet.accepts(r.diet)).collect()
}

/// Recipes mentioning none of the lower-cased `tokens`.
///
/// An empty token list keeps every recipe.
pub fn filter_by_allergies<'a>(recipes: Vec<&'a Recipe>, tokens: &[String]) -> Vec<&'a Recipe> {
    if tokens.is_empty() {
        return recipes;
    }
    recipes
        .into_iter()
        .filter(|r| !r.mentions_any(tokens))
        .collect()
}

/// Both filters applied for `profile`, in catalog order.
pub fn candidate_recipes<'a>(profile: &Profile, catalog: &'a [Recipe]) -> Vec<&'a Recipe> {
    let by_diet = filter_by_diet(catalog, profile.diet_type);
    filter_by_allergies(by_diet, &profile.allergy_tokens())
}
