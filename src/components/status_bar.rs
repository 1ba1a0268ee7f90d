use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::picker::Picker;
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let t = theme::current();
        let w = area.width as usize;

        let mode_str = match (&app.picker, app.focus) {
            (Some(Picker::Date(_)), _) => "[Date]",
            (Some(Picker::Time(_)), _) => "[Time]",
            (None, Focus::Message) => "[Edit]",
            (None, _) => "[Form]",
        };
        let left = format!(" {} ", mode_str);

        // A pending confirmation replaces the key hints until it expires.
        if let Some(ref toast) = app.toast {
            let text = format!(" {} ", toast.text);
            let padding = " ".repeat(w.saturating_sub(left.len() + text.chars().count()));
            let line = Line::from(vec![
                Span::styled(left, t.status),
                Span::styled(padding, t.status),
                Span::styled(text, t.toast),
            ]);
            frame.render_widget(Paragraph::new(line).style(t.status), area);
            return;
        }

        let hints = match (&app.picker, app.focus) {
            (Some(_), _) => " Enter:OK Esc:Cancel",
            (None, Focus::Message) if w >= 70 => {
                " type:Message Tab:Next Enter:Next field Ctrl+S:Set Ctrl+C:Quit"
            }
            (None, Focus::Message) => " Tab:Next Ctrl+C:Quit",
            (None, _) if w >= 70 => {
                " Tab:Next Enter:Press d:Date t:Time s:Set c:Clear ?:Help q:Quit"
            }
            (None, _) if w >= 40 => " Tab:Next Enter:Press ?:Help q:Quit",
            (None, _) => " ?:Help q:Quit",
        };

        let padding = " ".repeat(w.saturating_sub(left.len() + hints.len()));
        let line = Line::from(vec![
            Span::styled(left, t.status),
            Span::styled(padding, t.status),
            Span::styled(hints, t.status),
        ]);
        frame.render_widget(Paragraph::new(line).style(t.status), area);
    }
}
