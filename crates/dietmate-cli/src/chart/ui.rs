//! Chart rendering using ratatui.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{BarChart, Block, Borders, Paragraph};

const BAR_WIDTH: u16 = 7;
const BAR_GAP: u16 = 2;

/// Render the bar chart and the footer.
pub fn render(f: &mut Frame, data: &[(&str, u64)], average: f64) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // chart
            Constraint::Length(1), // footer
        ])
        .split(f.area());

    render_chart(f, data, chunks[0]);
    render_footer(f, average, chunks[1]);
}

fn render_chart(f: &mut Frame, data: &[(&str, u64)], area: Rect) {
    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Weekly Calorie Intake ")
                .borders(Borders::ALL),
        )
        .data(data)
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(Color::Yellow));

    f.render_widget(chart, area);
}

fn render_footer(f: &mut Frame, average: f64, area: Rect) {
    let bar = Line::from(vec![
        Span::styled(
            " Calories (kcal) ",
            Style::default().bg(Color::Blue).fg(Color::White),
        ),
        Span::raw("  "),
        Span::raw(format!("avg {average:.0} kcal/day")),
        Span::raw("  "),
        Span::styled("q to quit", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(bar), area);
}
