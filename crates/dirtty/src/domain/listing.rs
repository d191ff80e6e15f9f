use crate::domain::dirent::Dirent;

/// Explicit render state for a directory listing.
///
/// Exactly one variant is drawn per frame, first match wins:
/// loading indicator, then error message, then the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingState {
    /// A listing request is in flight.
    Loading,
    /// The last listing request failed; the message is shown verbatim.
    Failed(String),
    /// The listing to render, in display order.
    Ready(Vec<Dirent>),
}

impl ListingState {
    /// Returns the entries to render, or an empty slice outside `Ready`.
    pub fn entries(&self) -> &[Dirent] {
        match self {
            ListingState::Ready(entries) => entries,
            ListingState::Loading | ListingState::Failed(_) => &[],
        }
    }

    /// Looks up an entry by its stable path identity.
    pub fn entry(&self, path: &str) -> Option<&Dirent> {
        self.entries().iter().find(|dirent| dirent.path == path)
    }

    /// Position of `path` within the listing order, if present.
    pub fn position(&self, path: &str) -> Option<usize> {
        self.entries().iter().position(|dirent| dirent.path == path)
    }
}
