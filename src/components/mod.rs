pub mod help;
pub mod picker_popup;
pub mod reminder_form;
pub mod reminder_list;
pub mod status_bar;

pub use help::Help;
pub use picker_popup::PickerPopup;
pub use reminder_form::ReminderForm;
pub use reminder_list::ReminderListView;
pub use status_bar::StatusBar;

use ratatui::layout::Rect;

/// A `w`×`h` box centered in `area`, shrunk to fit when `area` is smaller.
pub fn centered_rect(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Cut `s` to at most `max` characters, marking the cut with "...".
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

    /// Render into an off-screen buffer and return its rows as strings.
    pub fn render_lines(w: u16, h: u16, draw: impl FnOnce(&mut Frame)) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
        terminal.draw(draw).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    pub fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }
}
