use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;

/// Top chrome: app identity on the left, console context on the right.
pub struct StatusBar {
    privileged: bool,
}

impl StatusBar {
    /// Creates a status bar for the given console context.
    pub fn new(privileged: bool) -> Self {
        Self { privileged }
    }
}

impl Component for StatusBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let version = env!("CARGO_PKG_VERSION");
        let left_text = Span::styled(
            format!(" Dirtty v{version}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let (context_label, context_color) = if self.privileged {
            ("privileged ", Color::Yellow)
        } else {
            ("read-only ", Color::Gray)
        };
        let right_text = Span::styled(context_label, Style::default().fg(context_color));

        let left_width = u16::try_from(left_text.width()).unwrap_or(u16::MAX);
        let right_width = u16::try_from(right_text.width()).unwrap_or(u16::MAX);
        let padding = area
            .width
            .saturating_sub(left_width.saturating_add(right_width));
        let status_bar = Paragraph::new(Line::from(vec![
            left_text,
            Span::raw(" ".repeat(padding as usize)),
            right_text,
        ]))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

        f.render_widget(status_bar, area);
    }
}
