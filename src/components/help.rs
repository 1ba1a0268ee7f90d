use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme;

use super::centered_rect;

pub struct Help;

impl Help {
    pub fn render(frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(area, 52, 21);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keybindings ")
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        let entry = |keys: &'static str, desc: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {:<12}", keys), key_style),
                Span::raw(desc),
            ])
        };

        let lines = vec![
            Line::from(Span::styled("Form", section_style)),
            entry("Tab/S-Tab", "Next / previous control"),
            entry("Enter", "Press the focused button"),
            entry("type", "Edit message (when focused)"),
            entry("Ctrl+S", "Set reminder from any control"),
            Line::from(""),
            Line::from(Span::styled("Actions", section_style)),
            entry("d", "Select date"),
            entry("t", "Select time"),
            entry("s", "Set reminder"),
            entry("c", "Clear all reminders"),
            entry("i", "Back to the message field"),
            entry("j/k \u{2191}/\u{2193}", "Scroll reminder list"),
            Line::from(""),
            Line::from(vec![
                Span::styled("  q", key_style),
                Span::styled(" / ", theme::current().dim),
                Span::styled("Ctrl+C     ", key_style),
                Span::raw("Quit"),
            ]),
            Line::from(vec![
                Span::styled("  Esc / ?       ", key_style),
                Span::raw("Close this help"),
            ]),
        ];

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(para, inner);
    }
}
