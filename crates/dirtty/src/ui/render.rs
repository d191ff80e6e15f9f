use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::TableState;

use crate::domain::listing::ListingState;
use crate::ui::pages::dir_listing::DirListingPage;
use crate::ui::{components, layout};

/// A trait for UI pages that enforces a standard rendering interface.
pub trait Page {
    /// Renders a page in the provided frame and area.
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    /// Renders a component in the provided frame and area.
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Immutable data required to draw a single UI frame.
pub struct RenderContext<'a> {
    pub active_row: Option<&'a str>,
    pub current_path: &'a str,
    pub listing: &'a ListingState,
    pub notice: Option<&'a str>,
    pub now: i64,
    pub privileged: bool,
    pub table_state: &'a mut TableState,
}

/// Renders a complete frame including status bar, content area, and footer.
pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let (status_bar_area, content_area, footer_bar_area) = layout::chrome_layout(f.area());

    components::status_bar::StatusBar::new(context.privileged).render(f, status_bar_area);

    let entry_count = match context.listing {
        ListingState::Ready(entries) => Some(entries.len()),
        ListingState::Loading | ListingState::Failed(_) => None,
    };
    components::footer_bar::FooterBar::new(context.current_path.to_string())
        .entry_count(entry_count)
        .notice(context.notice.map(ToString::to_string))
        .render(f, footer_bar_area);

    DirListingPage::new(
        context.listing,
        context.active_row,
        context.privileged,
        context.now,
        context.table_state,
    )
    .render(f, content_area);
}
