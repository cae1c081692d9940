//! Per-day nutrition totals, the data behind the calorie chart.

use dietmate_store::models::{DayPlan, MealPlan};

/// Summed calories and macros for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTotals {
    /// Day label, e.g. `"Day 1"`.
    pub label: String,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl DailyTotals {
    fn for_day(day: &DayPlan) -> Self {
        let mut totals = Self {
            label: day.label(),
            calories: 0,
            protein: 0,
            carbs: 0,
            fat: 0,
        };
        for meal in &day.meals {
            let r = &meal.recipe;
            totals.calories = totals.calories.saturating_add(r.calories);
            totals.protein = totals.protein.saturating_add(r.protein);
            totals.carbs = totals.carbs.saturating_add(r.carbs);
            totals.fat = totals.fat.saturating_add(r.fat);
        }
        totals
    }
}

/// Totals for each day, in day order.
pub fn daily_totals(plan: &MealPlan) -> Vec<DailyTotals> {
    plan.days.iter().map(DailyTotals::for_day).collect()
}

/// `(day label, total calories)` for each day, in day order.
pub fn aggregate_calories(plan: &MealPlan) -> Vec<(String, u32)> {
    daily_totals(plan)
        .into_iter()
        .map(|t| (t.label, t.calories))
        .collect()
}

/// Mean of the daily calorie totals, or `None` for an empty plan.
pub fn weekly_average_calories(series: &[(String, u32)]) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    let sum: u64 = series.iter().map(|(_, c)| u64::from(*c)).sum();
    Some(sum as f64 / series.len() as f64)
}
