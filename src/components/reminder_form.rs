use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Focus;
use crate::reminder::PendingSelection;
use crate::theme;

use super::truncate;

pub struct ReminderForm;

impl ReminderForm {
    /// Height the form needs, borders included.
    pub const HEIGHT: u16 = 10;

    pub fn render(frame: &mut Frame, area: Rect, draft: &PendingSelection, focus: Focus) {
        let t = theme::current();

        let block = Block::default()
            .title(" New Reminder ")
            .title_style(t.header)
            .borders(Borders::ALL)
            .border_style(t.border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(3), // message
            Constraint::Length(1), // date
            Constraint::Length(1), // time
            Constraint::Length(1), // spacer
            Constraint::Length(1), // set / clear
            Constraint::Min(0),
        ])
        .split(inner);

        render_message(frame, rows[0], &draft.message, focus == Focus::Message);
        render_picker_row(
            frame,
            rows[1],
            "Select Date",
            "Selected Date: ",
            &draft.date,
            focus == Focus::SelectDate,
        );
        render_picker_row(
            frame,
            rows[2],
            "Select Time",
            "Selected Time: ",
            &draft.time,
            focus == Focus::SelectTime,
        );

        let actions = Line::from(vec![
            button("Set Reminder", focus == Focus::SetReminder),
            Span::raw("  "),
            button("Clear All Reminders", focus == Focus::ClearAll),
        ]);
        frame.render_widget(Paragraph::new(actions), rows[4]);
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, active: bool) {
    let t = theme::current();
    let border_style = if active { t.focus } else { t.border };

    let block = Block::default()
        .title(" Enter Reminder Message ")
        .title_style(if active { t.focus } else { t.dim })
        .borders(Borders::ALL)
        .border_style(border_style);

    // Keep the tail visible while typing.
    let inner_w = area.width.saturating_sub(3) as usize;
    let len = message.chars().count();
    let visible: String = message.chars().skip(len.saturating_sub(inner_w)).collect();
    let cursor = if active { "_" } else { "" };

    let text = Paragraph::new(format!("{}{}", visible, cursor)).block(block);
    frame.render_widget(text, area);
}

fn render_picker_row(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    caption: &str,
    value: &str,
    active: bool,
) {
    let t = theme::current();
    let room = (area.width as usize).saturating_sub(label.len() + 6 + caption.len());

    let line = Line::from(vec![
        button(label, active),
        Span::raw("  "),
        Span::styled(caption.to_string(), t.dim),
        Span::raw(truncate(value, room)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn button(label: &str, active: bool) -> Span<'static> {
    let style = if active {
        theme::current().selected.add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    Span::styled(format!("[ {} ]", label), style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::{contains, render_lines};

    #[test]
    fn shows_draft_values_and_buttons() {
        let draft = PendingSelection {
            message: "Buy milk".to_string(),
            date: "2024-01-15".to_string(),
            time: "09:00".to_string(),
        };
        let lines = render_lines(60, ReminderForm::HEIGHT, |frame| {
            let area = frame.area();
            ReminderForm::render(frame, area, &draft, Focus::Message)
        });

        assert!(contains(&lines, "Buy milk_"));
        assert!(contains(&lines, "Selected Date: 2024-01-15"));
        assert!(contains(&lines, "Selected Time: 09:00"));
        assert!(contains(&lines, "[ Set Reminder ]"));
        assert!(contains(&lines, "[ Clear All Reminders ]"));
    }

    #[test]
    fn empty_draft_shows_blank_selection() {
        let draft = PendingSelection::new();
        let lines = render_lines(60, ReminderForm::HEIGHT, |frame| {
            let area = frame.area();
            ReminderForm::render(frame, area, &draft, Focus::SetReminder)
        });

        assert!(contains(&lines, "Selected Date: "));
        assert!(!contains(&lines, "_"));
    }
}
