use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::picker::{DateField, DatePicker, Picker, TimeField, TimePicker};
use crate::theme;

use super::centered_rect;

pub struct PickerPopup;

impl PickerPopup {
    pub fn render(frame: &mut Frame, area: Rect, picker: &Picker) {
        let popup_area = centered_rect(area, 36, 8);
        frame.render_widget(Clear, popup_area);

        let (title, value, help) = match picker {
            Picker::Date(p) => (" Select Date ", date_line(p), date_help()),
            Picker::Time(p) => (" Select Time ", time_line(p), time_help()),
        };

        let accent = theme::current().focus;
        let block = Block::default()
            .title(title)
            .title_style(accent.add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(accent);

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let rows = Layout::vertical([
            Constraint::Length(1), // spacer
            Constraint::Length(1), // value
            Constraint::Length(1), // spacer
            Constraint::Min(1),    // help
        ])
        .split(inner);

        frame.render_widget(Paragraph::new(value).alignment(Alignment::Center), rows[1]);
        frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), rows[3]);
    }
}

fn part(text: String, focused: bool) -> Span<'static> {
    if focused {
        Span::styled(text, theme::current().selected)
    } else {
        Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
    }
}

fn date_line(p: &DatePicker) -> Line<'static> {
    let sep = Span::styled("-", theme::current().dim);
    Line::from(vec![
        part(format!("{:04}", p.date.year()), p.focus == DateField::Year),
        sep.clone(),
        part(format!("{:02}", p.date.month()), p.focus == DateField::Month),
        sep,
        part(format!("{:02}", p.date.day()), p.focus == DateField::Day),
        Span::styled(format!("  {}", p.date.format("%a")), theme::current().dim),
    ])
}

fn time_line(p: &TimePicker) -> Line<'static> {
    Line::from(vec![
        part(format!("{:02}", p.hour), p.focus == TimeField::Hour),
        Span::styled(":", theme::current().dim),
        part(format!("{:02}", p.minute), p.focus == TimeField::Minute),
    ])
}

fn key(k: &'static str) -> Span<'static> {
    Span::styled(k, Style::default().add_modifier(Modifier::BOLD))
}

fn hint(h: &'static str) -> Span<'static> {
    Span::styled(h, theme::current().dim)
}

fn date_help() -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            key("\u{2190}\u{2192}"),
            hint(":Field "),
            key("\u{2191}\u{2193}"),
            hint(":Change "),
            key("t"),
            hint(":Today"),
        ]),
        Line::from(vec![key("Enter"), hint(":OK "), key("Esc"), hint(":Cancel")]),
    ]
}

fn time_help() -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            key("\u{2190}\u{2192}"),
            hint(":Field "),
            key("\u{2191}\u{2193}"),
            hint(":Change "),
            key("0-9"),
            hint(":Type"),
        ]),
        Line::from(vec![key("Enter"), hint(":OK "), key("Esc"), hint(":Cancel")]),
    ]
}
