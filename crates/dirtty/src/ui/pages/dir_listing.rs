use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use crate::domain::dirent::Dirent;
use crate::domain::listing::ListingState;
use crate::ui::Page;
use crate::ui::components::dirent_row::DirentRow;
use crate::ui::icon::Icon;
use crate::ui::layout;

const NAME_HEADER: &str = "Name";
const SIZE_HEADER: &str = "Size";
const LAST_UPDATE_HEADER: &str = "Last Update";

/// Directory listing page renderer.
///
/// Draws exactly one of three views, first match wins: loading
/// indicator, error message, or the listing table. All state is owned
/// by the caller; the page never mutates anything but the table
/// scroll/selection state handed to it.
pub struct DirListingPage<'a> {
    pub active_row: Option<&'a str>,
    pub listing: &'a ListingState,
    pub now: i64,
    pub privileged: bool,
    pub table_state: &'a mut TableState,
}

impl<'a> DirListingPage<'a> {
    /// Creates a listing page renderer.
    pub fn new(
        listing: &'a ListingState,
        active_row: Option<&'a str>,
        privileged: bool,
        now: i64,
        table_state: &'a mut TableState,
    ) -> Self {
        Self {
            active_row,
            listing,
            now,
            privileged,
            table_state,
        }
    }

    fn render_table(&mut self, f: &mut Frame, area: Rect, entries: &[Dirent]) {
        let table_area = layout::table_area(area);
        let inner = layout::table_inner_area(area);
        let widths = layout::column_widths(inner.width);

        // Selection mirrors the active row's stable path identity, so a
        // reordered or reloaded listing can never highlight the wrong row.
        let selected = self
            .active_row
            .and_then(|path| entries.iter().position(|dirent| dirent.path == path));
        self.table_state.select(selected);

        let header_style = Style::default().bg(Color::Gray).fg(Color::Black);
        let header_cells = [
            Cell::from(""),
            Cell::from(NAME_HEADER),
            Cell::from(""),
            Cell::from(SIZE_HEADER),
            Cell::from(LAST_UPDATE_HEADER),
        ];
        let header = Row::new(header_cells)
            .style(header_style)
            .height(1)
            .bottom_margin(1);

        let rows = entries.iter().map(|dirent| {
            let active = self.active_row == Some(dirent.path.as_str());
            DirentRow::new(dirent, active, self.privileged, widths[1], self.now).row()
        });
        let table = Table::new(rows, widths.map(Constraint::Length))
            .column_spacing(layout::COLUMN_SPACING)
            .header(header)
            .block(Block::default().borders(Borders::ALL))
            .row_highlight_style(Style::default().bg(Color::DarkGray));

        f.render_stateful_widget(table, table_area, self.table_state);
    }
}

impl Page for DirListingPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let listing = self.listing;
        match listing {
            ListingState::Loading => render_loading(f, area),
            ListingState::Failed(message) => render_error(f, area, message),
            ListingState::Ready(entries) => self.render_table(f, area, entries),
        }
    }
}

fn render_loading(f: &mut Frame, area: Rect) {
    let message = format!("{} Loading...", Icon::current_spinner());
    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));

    f.render_widget(paragraph, centered_line(area));
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));

    f.render_widget(paragraph, centered_line(area));
}

/// One centered line at roughly two fifths of the area's height.
fn centered_line(area: Rect) -> Rect {
    let chunks = Layout::default()
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    chunks[1]
}
