//! Shopping list extraction and the plain-text export format.
//!
//! ```text
//! <header>
//! ------------------------
//! • Almond milk
//! • Banana
//! ```

use std::collections::BTreeSet;
use std::io::{self, Write};

use dietmate_store::models::MealPlan;

/// Header line used when none is configured.
pub const DEFAULT_HEADER: &str = "🛒 Dietmate Shopping List";

const RULE: &str = "------------------------";

/// Every ingredient in the plan, deduplicated exactly and sorted.
///
/// Ingredients are bare names; `"Eggs"` and `"eggs"` stay distinct.
pub fn shopping_list(plan: &MealPlan) -> Vec<String> {
    plan.meals()
        .flat_map(|m| m.recipe.ingredients.iter())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Write the export text for `items` to `writer`.
pub fn write_shopping_list<W: Write>(writer: &mut W, header: &str, items: &[String]) -> io::Result<()> {
    writeln!(writer, "{header}")?;
    writeln!(writer, "{RULE}")?;
    for item in items {
        writeln!(writer, "• {item}")?;
    }
    Ok(())
}

/// The export text for `items` as a string.
pub fn render_shopping_list(header: &str, items: &[String]) -> String {
    let mut out = String::with_capacity(header.len() + RULE.len() + items.len() * 16);
    out.push_str(header);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    for item in items {
        out.push_str("• ");
        out.push_str(item);
        out.push('\n');
    }
    out
}
