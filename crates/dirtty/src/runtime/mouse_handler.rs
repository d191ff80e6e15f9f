use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::App;
use crate::ui::layout::{self, ListingHit};

/// Handles pointer input for the listing console.
///
/// Motion over a body row makes it the active row (pointer-enter);
/// motion anywhere else clears it (pointer-leave). Left-clicks resolve
/// through the shared listing layout, so only targets that are actually
/// drawn can be activated.
pub(crate) fn handle_mouse_event(app: &mut App, mouse: MouseEvent, frame_area: Rect) {
    let (_, content_area, _) = layout::chrome_layout(frame_area);

    match mouse.kind {
        MouseEventKind::Moved => {
            let hovered = hit(app, content_area, mouse.column, mouse.row)
                .and_then(|listing_hit| app.entry_at(listing_hit.index()))
                .map(|dirent| dirent.path);
            app.set_active_row(hovered);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(listing_hit) = hit(app, content_area, mouse.column, mouse.row) else {
                return;
            };
            let Some(dirent) = app.entry_at(listing_hit.index()) else {
                return;
            };

            match listing_hit {
                // Name activation descends into directories; file names
                // are plain text and activate nothing.
                ListingHit::Name(_) => app.open_folder(&dirent),
                ListingHit::DeleteIcon(_) => app.delete_dirent(&dirent),
                ListingHit::DownloadIcon(_) => app.download_dirent(&dirent),
                ListingHit::Row(_) => {}
            }
        }
        MouseEventKind::ScrollDown => app.next_row(),
        MouseEventKind::ScrollUp => app.previous_row(),
        _ => {}
    }
}

fn hit(app: &App, content_area: Rect, column: u16, row: u16) -> Option<ListingHit> {
    let listing = app.listing().lock().ok()?;

    layout::hit_test(
        content_area,
        listing.entries(),
        app.active_row.as_deref(),
        app.privileged,
        app.table_state.offset(),
        column,
        row,
    )
}
