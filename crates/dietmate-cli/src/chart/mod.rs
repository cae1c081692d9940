//! Weekly calorie chart: an interactive bar chart, or text bars when
//! stdout is not a terminal.

mod text;
mod ui;

use std::io::{self, IsTerminal};

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use dietmate_core::Session;
use dietmate_core::calories::weekly_average_calories;

use crate::plan_cmds::explain;

pub use text::render_text_chart;

const TEXT_BAR_WIDTH: usize = 40;

/// Show the current plan's daily calories.
pub fn run_chart(session: &Session, plain: bool) -> Result<()> {
    let series = session.calorie_series().map_err(explain)?;

    if plain || !io::stdout().is_terminal() {
        print!("{}", render_text_chart(&series, TEXT_BAR_WIDTH));
        return Ok(());
    }

    let average = weekly_average_calories(&series).unwrap_or(0.0);
    let data: Vec<(&str, u64)> = series
        .iter()
        .map(|(label, kcal)| (label.as_str(), u64::from(*kcal)))
        .collect();

    let _screen = enter_chart_screen()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    run_event_loop(&mut terminal, &data, average)
}

/// Runs its closure when dropped, on success and error paths alike.
struct RestoreOnDrop<F: FnMut()>(F);

impl<F: FnMut()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        (self.0)()
    }
}

/// Enable raw mode and the alternate screen; both are undone when the
/// returned guard drops, including when a later setup step fails.
fn enter_chart_screen() -> Result<RestoreOnDrop<impl FnMut()>> {
    enable_raw_mode()?;
    let guard = RestoreOnDrop(|| {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "failed to disable raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show) {
            tracing::warn!(error = %e, "failed to leave alternate screen");
        }
    });
    execute!(io::stdout(), EnterAlternateScreen)?;
    Ok(guard)
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    data: &[(&str, u64)],
    average: f64,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, data, average))?;

        // Static data: block until the next input.
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(());
                }
                _ => {}
            }
        }
    }
}
