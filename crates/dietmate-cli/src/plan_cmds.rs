//! CLI handlers for `dietmate plan` subcommands.
//!
//! Implements:
//! - `dietmate plan generate` -- build a new 7-day plan and save it as current
//! - `dietmate plan show`     -- print the current plan

use anyhow::Result;

use dietmate_core::calories::daily_totals;
use dietmate_core::{Prerequisite, Session, SessionError};
use dietmate_store::JsonStore;
use dietmate_store::models::PlanRecord;

use crate::PlanCommands;

/// Dispatch a `PlanCommands` variant to the appropriate handler.
pub fn run_plan_command(
    command: PlanCommands,
    session: &mut Session,
    store: &JsonStore,
) -> Result<()> {
    match command {
        PlanCommands::Generate => cmd_generate(session, store),
        PlanCommands::Show => cmd_show(session),
    }
}

/// One-line fix for a missing prerequisite.
pub fn prerequisite_hint(missing: Prerequisite) -> String {
    match missing {
        Prerequisite::Profile => {
            format!("{missing}; run `dietmate profile set --name <NAME>` first")
        }
        Prerequisite::Recipes => format!(
            "{missing}; run `dietmate recipes load-samples` or `dietmate recipes import <FILE>` first"
        ),
    }
}

/// Turn session errors into user-facing messages with a next step.
pub fn explain(err: SessionError) -> anyhow::Error {
    match err {
        SessionError::MissingPrerequisite(missing) => anyhow::anyhow!(prerequisite_hint(missing)),
        SessionError::NoPlan => {
            anyhow::anyhow!("{err}; run `dietmate plan generate` first")
        }
        other => other.into(),
    }
}

// -----------------------------------------------------------------------
// dietmate plan generate
// -----------------------------------------------------------------------

fn cmd_generate(session: &mut Session, store: &JsonStore) -> Result<()> {
    let mut rng = rand::rng();
    session.generate_plan(&mut rng).map_err(explain)?;
    session.save_plan(store).map_err(explain)?;

    let record = session.current_plan().map_err(explain)?;
    print_plan(record);
    Ok(())
}

// -----------------------------------------------------------------------
// dietmate plan show
// -----------------------------------------------------------------------

fn cmd_show(session: &Session) -> Result<()> {
    let record = session.current_plan().map_err(explain)?;
    print_plan(record);
    Ok(())
}

fn print_plan(record: &PlanRecord) {
    print!("{}", format_plan(record));
}

/// Render a plan as one block per day with totals in the day header.
fn format_plan(record: &PlanRecord) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Meal plan for {} (generated {})",
        record.profile_name,
        record.generated_at.format("%Y-%m-%d %H:%M UTC")
    );

    let totals = daily_totals(&record.plan);
    for (day, total) in record.plan.days.iter().zip(&totals) {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} -- {} kcal (P {}g / C {}g / F {}g)",
            total.label, total.calories, total.protein, total.carbs, total.fat
        );
        for meal in &day.meals {
            let _ = writeln!(
                out,
                "  {:<10} {} ({} kcal)",
                format!("{}:", meal.slot),
                meal.recipe.name,
                meal.recipe.calories
            );
        }
    }
    out
}
