//! Meal planning core for dietmate.
//!
//! - [`catalog`]: sample recipes and recipe file validation.
//! - [`plan`]: diet/allergy filtering and random weekly plan generation.
//! - [`shopping`]: shopping list extraction and export text.
//! - [`calories`]: per-day calorie and macro totals.
//! - [`session`]: the explicit session state the CLI drives.

pub mod calories;
pub mod catalog;
pub mod plan;
pub mod session;
pub mod shopping;

pub use session::{Prerequisite, Session, SessionError};
