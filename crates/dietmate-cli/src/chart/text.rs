//! Text bars for non-interactive output.

use std::fmt::Write;

use dietmate_core::calories::weekly_average_calories;

/// Render one bar per day, scaled so the largest day fills `width` cells.
///
/// ```text
/// Weekly Calorie Intake
/// Day 1  ████████████████████  1350 kcal
/// ...
/// Average: 1285 kcal/day
/// ```
pub fn render_text_chart(series: &[(String, u32)], width: usize) -> String {
    let mut out = String::from("Weekly Calorie Intake\n");
    let max = series.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let label_w = series.iter().map(|(l, _)| l.len()).max().unwrap_or(0);

    for (label, kcal) in series {
        let cells = if max == 0 {
            0
        } else {
            (u64::from(*kcal) * width as u64 / u64::from(max)) as usize
        };
        let _ = writeln!(
            out,
            "{label:<label_w$}  {:<width$}  {kcal} kcal",
            "█".repeat(cells)
        );
    }

    if let Some(avg) = weekly_average_calories(series) {
        let _ = writeln!(out, "Average: {avg:.0} kcal/day");
    }
    out
}
