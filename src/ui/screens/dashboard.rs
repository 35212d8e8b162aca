use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::panel;
use crate::models::Kind;
use crate::summary::{share, Totals};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, percent_label, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // All-time cards
            Constraint::Length(5), // This month cards
            Constraint::Min(8),    // Category charts
        ])
        .split(area);

    render_totals_row(f, chunks[0], "All Time", &app.summary.all_time);
    let month = app.today.format("%B %Y").to_string();
    render_totals_row(f, chunks[1], &month, &app.summary.month);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    render_category_chart(f, charts[0], app, Kind::Expense);
    render_category_chart(f, charts[1], app, Kind::Income);
}

fn render_totals_row(f: &mut Frame, area: Rect, label: &str, totals: &Totals) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_card(f, cards[0], &format!("{label} Income"), totals.income, theme::GREEN);
    render_card(f, cards[1], &format!("{label} Expenses"), totals.expense, theme::RED);
    render_card(
        f,
        cards[2],
        &format!("{label} Balance"),
        totals.balance,
        theme::balance_color(totals.balance < Decimal::ZERO),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, amount: Decimal, color: Color) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(panel(title));

    f.render_widget(text, area);
}

fn render_category_chart(f: &mut Frame, area: Rect, app: &App, kind: Kind) {
    let title = format!("{} by Category", kind.label());
    let entries = app.summary.categories.for_kind(kind);

    if entries.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("No {} recorded yet", kind.as_str()),
                theme::dim_style(),
            )),
            Line::from(Span::styled("Press a to add one", theme::dim_style())),
        ])
        .centered()
        .block(panel(title));
        f.render_widget(msg, area);
        return;
    }

    let total = match kind {
        Kind::Expense => app.summary.all_time.expense,
        Kind::Income => app.summary.all_time.income,
    };
    let color = theme::kind_color(kind);

    let bars: Vec<Bar> = entries
        .iter()
        .take(12)
        .map(|(name, amount)| {
            let cents = (*amount * Decimal::ONE_HUNDRED).to_u64().unwrap_or(0);
            Bar::default()
                .value(cents)
                .text_value(percent_label(share(*amount, total)))
                .label(Line::from(truncate(name, 10)))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(panel(title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .bar_style(Style::default().fg(color));

    f.render_widget(chart, area);
}
