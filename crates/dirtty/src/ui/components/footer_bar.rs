use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;

const KEY_HINTS: &str = "j/k: move | Enter: open | u: up | r: reload | q: quit";

/// Bottom chrome: current listing path on the left, the latest operation
/// notice (or key hints) on the right.
pub struct FooterBar {
    current_path: String,
    entry_count: Option<usize>,
    notice: Option<String>,
}

impl FooterBar {
    /// Creates a footer for the listing at `current_path` ("" = root).
    pub fn new(current_path: String) -> Self {
        Self {
            current_path,
            entry_count: None,
            notice: None,
        }
    }

    /// Sets the number of entries shown, when the table is visible.
    pub fn entry_count(mut self, entry_count: Option<usize>) -> Self {
        self.entry_count = entry_count;
        self
    }

    /// Sets the operation notice shown instead of the key hints.
    pub fn notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }
}

impl Component for FooterBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let mut left = format!(" /{}", self.current_path);
        if let Some(count) = self.entry_count {
            let noun = if count == 1 { "item" } else { "items" };
            left.push_str(&format!(" — {count} {noun}"));
        }
        let left_text = Span::styled(
            left,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::DIM),
        );

        let (right, right_color) = match &self.notice {
            Some(notice) => (format!("{notice} "), Color::Yellow),
            None => (format!("{KEY_HINTS} "), Color::Gray),
        };
        let right_text = Span::styled(right, Style::default().fg(right_color));

        let left_width = left_text.width();
        let right_width = right_text.width();
        let total_width = area.width as usize;

        let mut spans = vec![left_text];
        if left_width + right_width < total_width {
            spans.push(Span::raw(" ".repeat(total_width - left_width - right_width)));
            spans.push(right_text);
        }

        let footer =
            Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));

        f.render_widget(footer, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_render_shows_path_and_count() {
        // Arrange
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        let footer = FooterBar::new("docs/guides".to_string()).entry_count(Some(3));

        // Act
        terminal
            .draw(|f| {
                let area = f.area();
                footer.render(f, area);
            })
            .expect("failed to draw");

        // Assert
        let text = buffer_text(&terminal);
        assert!(text.contains("/docs/guides — 3 items"));
        assert!(text.contains("q: quit"));
    }

    #[test]
    fn test_render_singular_item_count() {
        // Arrange
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        let footer = FooterBar::new(String::new()).entry_count(Some(1));

        // Act
        terminal
            .draw(|f| {
                let area = f.area();
                footer.render(f, area);
            })
            .expect("failed to draw");

        // Assert
        let text = buffer_text(&terminal);
        assert!(text.contains("/ — 1 item"));
    }

    #[test]
    fn test_render_notice_replaces_key_hints() {
        // Arrange
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        let footer =
            FooterBar::new(String::new()).notice(Some("Deleted report.csv".to_string()));

        // Act
        terminal
            .draw(|f| {
                let area = f.area();
                footer.render(f, area);
            })
            .expect("failed to draw");

        // Assert
        let text = buffer_text(&terminal);
        assert!(text.contains("Deleted report.csv"));
        assert!(!text.contains("q: quit"));
    }
}
