//! Meal plan generation: candidate filtering and slot assignment.

pub mod filter;
pub mod generate;

pub use filter::{candidate_recipes, filter_by_allergies, filter_by_diet};
pub use generate::{PlanError, generate_plan};
