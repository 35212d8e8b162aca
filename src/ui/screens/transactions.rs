use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use super::panel;
use crate::models::DAY_FORMAT;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{signed_amount, truncate};

fn title(app: &App) -> String {
    if app.filter_input.is_empty() {
        format!("Transactions ({})", app.transactions.len())
    } else {
        format!(
            "Transactions ({}) filter: '{}'",
            app.transactions.len(),
            app.filter_input
        )
    }
}

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.transactions.is_empty() {
        let msg = if app.filter_input.is_empty() {
            vec![
                Line::from(""),
                Line::from(Span::styled("No transactions yet", theme::dim_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Press a for the add form or use :add-txn",
                    theme::dim_style(),
                )),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("No transactions in category '{}'", app.filter_input),
                    theme::dim_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Esc to clear the filter",
                    theme::dim_style(),
                )),
            ]
        };
        f.render_widget(Paragraph::new(msg).centered().block(panel(title(app))), area);
        return;
    }

    let header_cells = ["ID", "Date", "Type", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .transactions
        .iter()
        .enumerate()
        .skip(app.cursor.scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let style = if i == app.cursor.index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let id = txn.id().map(|id| id.to_string()).unwrap_or_default();

            Row::new(vec![
                Cell::from(id),
                Cell::from(txn.date().format(DAY_FORMAT).to_string()),
                Cell::from(Span::styled(
                    txn.kind().label(),
                    theme::kind_style(txn.kind()),
                )),
                Cell::from(truncate(txn.category(), 30)),
                Cell::from(Span::styled(
                    signed_amount(txn),
                    theme::kind_style(txn.kind()),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(12),
        Constraint::Length(9),
        Constraint::Min(16),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(panel(title(app)));

    f.render_widget(table, area);
}
