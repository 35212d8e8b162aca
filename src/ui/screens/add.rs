use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::panel;
use crate::models::{max_amount, Kind, DEFAULT_CATEGORIES};
use crate::ui::app::{AddField, App, InputMode};
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(3)])
        .split(area);

    render_form(f, chunks[0], app);
    render_hints(f, chunks[1], app);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Editing;
    let form = &app.form;

    let lines: Vec<Line> = AddField::all()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let focused = editing && i == form.field;
            let marker = if focused { "> " } else { "  " };
            let label = format!("{marker}{:<10}", field.label());

            let value = match field {
                AddField::Amount => Span::styled(form.amount.clone(), theme::normal_style()),
                AddField::Category => Span::styled(form.category.clone(), theme::normal_style()),
                AddField::Date => Span::styled(form.date.clone(), theme::normal_style()),
                AddField::Kind => kind_toggle(form.kind),
            };

            let label_style = if focused {
                theme::selected_style()
            } else {
                theme::dim_style()
            };
            let mut spans = vec![Span::styled(label, label_style), Span::raw(" "), value];
            if focused && *field != AddField::Kind {
                spans.push(Span::styled("_", Style::default().fg(theme::ACCENT)));
            }
            Line::from(spans)
        })
        .collect();

    let mut text = vec![Line::from("")];
    text.extend(lines);

    let title = if editing {
        "Add Transaction (editing)"
    } else {
        "Add Transaction"
    };
    f.render_widget(Paragraph::new(text).block(panel(title)), area);
}

fn kind_toggle(selected: Kind) -> Span<'static> {
    let text = Kind::all()
        .iter()
        .map(|k| {
            if *k == selected {
                format!("[{}]", k.label())
            } else {
                format!(" {} ", k.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    Span::styled(
        text,
        Style::default()
            .fg(theme::kind_color(selected))
            .add_modifier(Modifier::BOLD),
    )
}

fn render_hints(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from(vec![
        Span::styled(" Suggestions: ", theme::section_style()),
        Span::styled(DEFAULT_CATEGORIES.join(", "), theme::dim_style()),
    ])];
    lines.push(Line::from(""));
    let help = if app.input_mode == InputMode::Editing {
        " Tab/Shift-Tab move between fields, ←/→ cycle type or suggestions, Enter saves, Esc stops editing"
    } else {
        " Press Enter or a to start editing"
    };
    lines.push(Line::from(Span::styled(help, theme::dim_style())));
    lines.push(Line::from(Span::styled(
        " Dates are YYYY-MM-DD or YYYY-MM-DD HH:MM:SS",
        theme::dim_style(),
    )));
    lines.push(Line::from(Span::styled(
        format!(
            " Amounts are whole cents, up to {}",
            format_amount(max_amount())
        ),
        theme::dim_style(),
    )));

    f.render_widget(Paragraph::new(lines).block(panel("Help")), area);
}
