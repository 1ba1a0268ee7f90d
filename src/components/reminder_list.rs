use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::reminder::Reminder;
use crate::theme;

use super::truncate;

pub struct ReminderListView;

impl ReminderListView {
    /// Draw every committed reminder as a small card, starting at `scroll`.
    pub fn render(frame: &mut Frame, area: Rect, reminders: &[Reminder], scroll: usize) {
        let t = theme::current();
        let w = area.width as usize;

        let title = if w >= 25 {
            format!(" Reminders ({}) ", reminders.len())
        } else {
            " Reminders ".to_string()
        };

        let mut block = Block::default()
            .title(title)
            .title_style(t.header)
            .borders(Borders::ALL)
            .border_style(t.border);
        if scroll > 0 {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {} above ", scroll),
                t.dim,
            )));
        }

        if reminders.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let msg = Paragraph::new("No reminders").style(t.dim);
            frame.render_widget(msg, inner);
            return;
        }

        let inner_w = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = reminders
            .iter()
            .skip(scroll)
            .map(|reminder| format_card(reminder, inner_w))
            .collect();

        let list = List::new(items).block(block);
        frame.render_widget(list, area);
    }
}

fn format_card(reminder: &Reminder, max_width: usize) -> ListItem<'static> {
    let t = theme::current();
    let field = |label: &str, value: &str, style: Style| {
        let room = max_width.saturating_sub(label.len() + 1);
        Line::from(vec![
            Span::styled(format!(" {}", label), t.dim),
            Span::styled(truncate(value, room), style),
        ])
    };

    ListItem::new(vec![
        field(
            "Message: ",
            &reminder.message,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        field("Date: ", &reminder.date, Style::default()),
        field("Time: ", &reminder.time, Style::default()),
        Line::from(""),
    ])
}
