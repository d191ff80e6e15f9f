use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};

use crate::domain::dirent::Dirent;
use crate::ui::icon::Icon;
use crate::ui::util::{format_size, relative_time, truncate_with_ellipsis};

/// One listing entry rendered as a table row.
///
/// The row is stateless: whether it is the active (hovered) row and
/// whether the console is privileged are decided by the parent and
/// passed in, which also decides which operation icons appear.
pub struct DirentRow<'a> {
    active: bool,
    dirent: &'a Dirent,
    name_width: u16,
    now: i64,
    privileged: bool,
}

/// Operation icons that can appear in a row's operations cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowOp {
    /// Delete the entry (privileged consoles only).
    Delete,
    /// Download the entry (files only).
    Download,
}

/// Icons visible in the operations cell, in render order.
///
/// Delete leads when both are shown; a row that is not active shows
/// nothing.
pub fn ops_icons(active: bool, privileged: bool, is_file: bool) -> Vec<RowOp> {
    let mut icons = Vec::new();
    if active && privileged {
        icons.push(RowOp::Delete);
    }
    if active && is_file {
        icons.push(RowOp::Download);
    }

    icons
}

impl<'a> DirentRow<'a> {
    /// Creates a row for one entry.
    pub fn new(dirent: &'a Dirent, active: bool, privileged: bool, name_width: u16, now: i64) -> Self {
        Self {
            active,
            dirent,
            name_width,
            now,
            privileged,
        }
    }

    /// Builds the five-cell table row.
    pub fn row(&self) -> Row<'static> {
        let cells = vec![
            Cell::from(self.icon_span()),
            Cell::from(self.name_span()),
            Cell::from(Line::from(self.ops_spans())),
            Cell::from(format_size(self.dirent.size, self.dirent.is_file)),
            Cell::from(relative_time(self.dirent.mtime, self.now)),
        ];

        Row::new(cells).height(1)
    }

    fn icon_span(&self) -> Span<'static> {
        let color = if self.dirent.is_file {
            Color::DarkGray
        } else {
            Color::Yellow
        };

        Span::styled(
            Icon::for_entry(self.dirent.is_file).as_str(),
            Style::default().fg(color),
        )
    }

    /// File names are plain text; directory names are activation targets.
    pub fn name_span(&self) -> Span<'static> {
        let name = truncate_with_ellipsis(&self.dirent.name, self.name_width);
        if self.dirent.is_file {
            Span::raw(name)
        } else {
            Span::styled(
                name,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            )
        }
    }

    fn ops_spans(&self) -> Vec<Span<'static>> {
        let icons = ops_icons(self.active, self.privileged, self.dirent.is_file);
        let mut spans = Vec::new();
        for (position, op) in icons.iter().enumerate() {
            if position > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(match op {
                RowOp::Delete => {
                    Span::styled(Icon::Delete.as_str(), Style::default().fg(Color::Red))
                }
                RowOp::Download => {
                    Span::styled(Icon::Download.as_str(), Style::default().fg(Color::Green))
                }
            });
        }

        spans
    }
}
