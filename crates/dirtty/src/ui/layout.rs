//! Shared listing geometry.
//!
//! Rendering and mouse hit-testing both derive cell positions from the
//! functions here, so click targets always line up with what is drawn.

use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};

use crate::domain::dirent::Dirent;
use crate::ui::components::dirent_row::{self, RowOp};

/// Spacing between table columns, in cells.
pub const COLUMN_SPACING: u16 = 1;
/// Header row plus its bottom margin.
const HEADER_ROWS: u16 = 2;
/// Page margin around the listing table.
const PAGE_MARGIN: u16 = 1;

const NAME_COLUMN: usize = 1;
const OPS_COLUMN: usize = 2;

/// Splits the full frame into status bar, content, and footer rows.
pub fn chrome_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// The rect the listing table widget is rendered into.
pub fn table_area(content_area: Rect) -> Rect {
    content_area.inner(Margin::new(PAGE_MARGIN, PAGE_MARGIN))
}

/// The table interior, inside the block borders.
pub fn table_inner_area(content_area: Rect) -> Rect {
    table_area(content_area).inner(Margin::new(1, 1))
}

/// The body-row region of the table, below the header.
pub fn body_area(content_area: Rect) -> Rect {
    let inner = table_inner_area(content_area);

    Rect {
        x: inner.x,
        y: inner.y.saturating_add(HEADER_ROWS),
        width: inner.width,
        height: inner.height.saturating_sub(HEADER_ROWS),
    }
}

/// Fixed column split: icon 5%, name 55%, operations 10%, size 15%, and
/// the last-update column absorbs the remainder.
pub fn column_widths(total: u16) -> [u16; 5] {
    let usable = total.saturating_sub(COLUMN_SPACING * 4);
    let of = |percent: u32| u16::try_from(u32::from(usable) * percent / 100).unwrap_or(0);

    let icon = of(5);
    let name = of(55);
    let ops = of(10);
    let size = of(15);
    let last_update = usable.saturating_sub(icon + name + ops + size);

    [icon, name, ops, size, last_update]
}

/// What a pointer position inside the content area resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingHit {
    /// The delete icon in the operations cell of the row at this index.
    DeleteIcon(usize),
    /// The download icon in the operations cell of the row at this index.
    DownloadIcon(usize),
    /// The name cell of the row at this index.
    Name(usize),
    /// Somewhere on the row at this index, outside any activation target.
    Row(usize),
}

impl ListingHit {
    /// Listing index of the row that was hit.
    pub fn index(self) -> usize {
        match self {
            ListingHit::DeleteIcon(index)
            | ListingHit::DownloadIcon(index)
            | ListingHit::Name(index)
            | ListingHit::Row(index) => index,
        }
    }
}

/// Resolves a pointer position against the rendered listing.
///
/// `offset` is the table's first visible row index; icon hits are only
/// reported when the icon is actually shown for that row, so a hidden
/// operation can never be activated.
pub fn hit_test(
    content_area: Rect,
    entries: &[Dirent],
    active_row: Option<&str>,
    privileged: bool,
    offset: usize,
    column: u16,
    row: u16,
) -> Option<ListingHit> {
    let body = body_area(content_area);
    if !body.contains(Position::new(column, row)) {
        return None;
    }

    let index = offset + usize::from(row - body.y);
    if index >= entries.len() {
        return None;
    }

    let inner = table_inner_area(content_area);
    let widths = column_widths(inner.width);
    let Some((cell, cell_x)) = column_at(column - inner.x, &widths) else {
        return Some(ListingHit::Row(index));
    };

    match cell {
        NAME_COLUMN => Some(ListingHit::Name(index)),
        OPS_COLUMN => {
            let dirent = &entries[index];
            let active = active_row == Some(dirent.path.as_str());

            match ops_hit(cell_x, active, privileged, dirent.is_file) {
                Some(RowOp::Delete) => Some(ListingHit::DeleteIcon(index)),
                Some(RowOp::Download) => Some(ListingHit::DownloadIcon(index)),
                None => Some(ListingHit::Row(index)),
            }
        }
        _ => Some(ListingHit::Row(index)),
    }
}

/// Maps an x offset inside the table interior to a column index and the
/// offset within that column. Spacing gaps resolve to `None`.
fn column_at(x: u16, widths: &[u16; 5]) -> Option<(usize, u16)> {
    let mut start = 0u16;
    for (index, width) in widths.iter().enumerate() {
        if x < start + width {
            return if x >= start {
                Some((index, x - start))
            } else {
                None
            };
        }
        start += width + COLUMN_SPACING;
    }

    None
}

/// Which operation icon sits at `x` within the operations cell.
///
/// Icons are one glyph wide and separated by a single space.
fn ops_hit(x: u16, active: bool, privileged: bool, is_file: bool) -> Option<RowOp> {
    if x % 2 != 0 {
        return None;
    }

    let icons = dirent_row::ops_icons(active, privileged, is_file);
    icons.get(usize::from(x / 2)).copied()
}
