use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use ratatui::widgets::TableState;

use crate::domain::dirent::Dirent;
use crate::domain::listing::ListingState;
use crate::infra::store::{DirentStore, StoreError};

/// Application state and orchestration.
///
/// Owns everything the listing view renders: the current path, the
/// privileged-context flag, the active (hovered) row keyed by entry
/// path, and the shared [`ListingState`] that background store tasks
/// write into. The view itself stays presentational; every domain
/// action funnels through the methods here and is delegated to the
/// injected [`DirentStore`].
pub struct App {
    /// Stable path identity of the active (hovered) row, if any.
    pub active_row: Option<String>,
    /// Store-relative path of the directory being shown ("" = root).
    pub current_path: String,
    /// Whether this console grants elevated operations (delete).
    pub privileged: bool,
    /// Table scroll/selection state; selection is derived from
    /// `active_row` at render time.
    pub table_state: TableState,
    // Bumped on navigation so stale listing results are discarded.
    generation: Arc<AtomicU64>,
    listing: Arc<Mutex<ListingState>>,
    notice: Arc<Mutex<Option<String>>>,
    store: Arc<dyn DirentStore>,
}

impl App {
    /// Creates the app and starts loading the store root.
    pub fn new(store: Arc<dyn DirentStore>, privileged: bool) -> Self {
        let app = Self {
            active_row: None,
            current_path: String::new(),
            privileged,
            table_state: TableState::default(),
            generation: Arc::new(AtomicU64::new(0)),
            listing: Arc::new(Mutex::new(ListingState::Loading)),
            notice: Arc::new(Mutex::new(None)),
            store,
        };
        app.spawn_list(String::new());

        app
    }

    /// Shared listing state read by the render loop.
    pub fn listing(&self) -> &Arc<Mutex<ListingState>> {
        &self.listing
    }

    /// Latest operation notice, if any.
    pub fn notice_text(&self) -> Option<String> {
        self.notice.lock().ok().and_then(|notice| notice.clone())
    }

    /// Invoked on name activation. Descends into directory entries;
    /// file names are plain text and activate nothing.
    pub fn open_folder(&mut self, dirent: &Dirent) {
        if dirent.is_file {
            return;
        }

        self.navigate(dirent.path.clone());
    }

    /// Invoked on delete activation. Privileged consoles only; the
    /// listing reloads once the store has removed the entry.
    pub fn delete_dirent(&self, dirent: &Dirent) {
        if !self.privileged {
            return;
        }

        let store = Arc::clone(&self.store);
        let listing = Arc::clone(&self.listing);
        let notice = Arc::clone(&self.notice);
        let generation = Arc::clone(&self.generation);
        let stamp = generation.load(Ordering::SeqCst);
        let path = self.current_path.clone();
        let dirent = dirent.clone();

        tokio::spawn(async move {
            match store.delete(dirent.clone()).await {
                Ok(()) => {
                    set_notice(&notice, format!("Deleted {}", dirent.name));
                    let result = store.list_dir(path).await;
                    // Drop the refreshed listing if the operator has
                    // navigated elsewhere in the meantime.
                    if generation.load(Ordering::SeqCst) == stamp {
                        apply_listing(&listing, result);
                    }
                }
                Err(error) => set_notice(&notice, format!("Delete failed: {error}")),
            }
        });
    }

    /// Invoked on download activation. File entries only.
    pub fn download_dirent(&self, dirent: &Dirent) {
        if !dirent.is_file {
            return;
        }

        let store = Arc::clone(&self.store);
        let notice = Arc::clone(&self.notice);
        let dirent = dirent.clone();

        tokio::spawn(async move {
            match store.download(dirent.clone()).await {
                Ok(destination) => set_notice(
                    &notice,
                    format!("Downloaded {} to {}", dirent.name, destination.display()),
                ),
                Err(error) => set_notice(&notice, format!("Download failed: {error}")),
            }
        });
    }

    /// Moves the active row one entry down (or onto the first entry).
    pub fn next_row(&mut self) {
        self.step_active(|current, last| match current {
            Some(index) => (index + 1).min(last),
            None => 0,
        });
    }

    /// Moves the active row one entry up (or onto the first entry).
    pub fn previous_row(&mut self) {
        self.step_active(|current, _| match current {
            Some(index) => index.saturating_sub(1),
            None => 0,
        });
    }

    /// Opens the active entry if it is a directory.
    pub fn open_active(&mut self) {
        if let Some(dirent) = self.active_dirent() {
            self.open_folder(&dirent);
        }
    }

    /// Deletes the active entry, subject to the privileged gate.
    pub fn delete_active(&self) {
        if let Some(dirent) = self.active_dirent() {
            self.delete_dirent(&dirent);
        }
    }

    /// Downloads the active entry if it is a file.
    pub fn download_active(&self) {
        if let Some(dirent) = self.active_dirent() {
            self.download_dirent(&dirent);
        }
    }

    /// Moves up to the parent directory, if not already at the root.
    pub fn ascend(&mut self) {
        if self.current_path.is_empty() {
            return;
        }

        self.navigate(parent_path(&self.current_path));
    }

    /// Reloads the current directory listing.
    pub fn reload(&mut self) {
        self.navigate(self.current_path.clone());
    }

    /// Sets or clears the active row by stable path identity.
    pub fn set_active_row(&mut self, path: Option<String>) {
        self.active_row = path;
    }

    /// The entry the active row points at, if it is still listed.
    pub fn active_dirent(&self) -> Option<Dirent> {
        let path = self.active_row.as_deref()?;
        let listing = self.listing.lock().ok()?;

        listing.entry(path).cloned()
    }

    /// The entry at a listing index, if any.
    pub fn entry_at(&self, index: usize) -> Option<Dirent> {
        let listing = self.listing.lock().ok()?;

        listing.entries().get(index).cloned()
    }

    fn navigate(&mut self, path: String) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.current_path.clone_from(&path);
        self.active_row = None;
        self.table_state = TableState::default();
        if let Ok(mut listing) = self.listing.lock() {
            *listing = ListingState::Loading;
        }

        self.spawn_list(path);
    }

    fn spawn_list(&self, path: String) {
        let store = Arc::clone(&self.store);
        let listing = Arc::clone(&self.listing);
        let generation = Arc::clone(&self.generation);
        let stamp = generation.load(Ordering::SeqCst);

        tokio::spawn(async move {
            let result = store.list_dir(path).await;
            if generation.load(Ordering::SeqCst) == stamp {
                apply_listing(&listing, result);
            }
        });
    }

    fn step_active(&mut self, step: impl Fn(Option<usize>, usize) -> usize) {
        let next = {
            let Ok(listing) = self.listing.lock() else {
                return;
            };
            let entries = listing.entries();
            if entries.is_empty() {
                return;
            }

            let current = self
                .active_row
                .as_deref()
                .and_then(|path| listing.position(path));
            let index = step(current, entries.len() - 1);
            entries[index].path.clone()
        };

        self.set_active_row(Some(next));
    }
}

fn apply_listing(listing: &Arc<Mutex<ListingState>>, result: Result<Vec<Dirent>, StoreError>) {
    if let Ok(mut guard) = listing.lock() {
        *guard = match result {
            Ok(entries) => ListingState::Ready(entries),
            Err(error) => ListingState::Failed(error.to_string()),
        };
    }
}

fn set_notice(notice: &Arc<Mutex<Option<String>>>, message: String) {
    if let Ok(mut guard) = notice.lock() {
        *guard = Some(message);
    }
}

/// Parent of a store-relative path; the root's parent is the root.
fn parent_path(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((parent, _)) => parent.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use crate::infra::store::MockDirentStore;

    use super::*;

    fn dirent(path: &str, is_file: bool) -> Dirent {
        Dirent {
            is_file,
            mtime: 0,
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            path: path.to_string(),
            size: 0,
        }
    }

    fn expect_list(store: &mut MockDirentStore, path: &str, entries: Vec<Dirent>) {
        let expected = path.to_string();
        store
            .expect_list_dir()
            .withf(move |path| *path == expected)
            .returning(move |_| {
                let entries = entries.clone();
                Box::pin(async move { Ok(entries) })
            });
    }

    /// Lets spawned store tasks run to completion on the test runtime.
    async fn settle() {
        for _ in 0..32 {
            tokio::task::yield_now().await;
        }
    }

    fn listing_snapshot(app: &App) -> ListingState {
        app.listing()
            .lock()
            .map(|listing| listing.clone())
            .expect("listing lock should not be poisoned")
    }

    #[tokio::test]
    async fn test_new_loads_root_listing() {
        // Arrange
        let mut store = MockDirentStore::new();
        expect_list(&mut store, "", vec![dirent("docs", false)]);

        // Act
        let app = App::new(Arc::new(store), false);
        let before = listing_snapshot(&app);
        settle().await;
        let after = listing_snapshot(&app);

        // Assert
        assert_eq!(before, ListingState::Loading);
        assert_eq!(after, ListingState::Ready(vec![dirent("docs", false)]));
    }

    #[tokio::test]
    async fn test_new_reports_listing_failure() {
        // Arrange
        let mut store = MockDirentStore::new();
        store.expect_list_dir().returning(|path| {
            Box::pin(async move { Err(StoreError::NotFound { path }) })
        });

        // Act
        let app = App::new(Arc::new(store), false);
        settle().await;

        // Assert
        assert_eq!(
            listing_snapshot(&app),
            ListingState::Failed(": not found".to_string())
        );
    }

    #[tokio::test]
    async fn test_open_folder_ignores_files() {
        // Arrange — exactly one listing call is allowed (the initial one)
        let mut store = MockDirentStore::new();
        store.expect_list_dir().times(1).returning(|_| {
            Box::pin(async move { Ok(vec![dirent("a.txt", true)]) })
        });
        let mut app = App::new(Arc::new(store), false);
        settle().await;

        // Act
        app.open_folder(&dirent("a.txt", true));
        settle().await;

        // Assert
        assert_eq!(app.current_path, "");
    }

    #[tokio::test]
    async fn test_open_folder_descends_into_directory() {
        // Arrange
        let mut store = MockDirentStore::new();
        expect_list(&mut store, "", vec![dirent("docs", false)]);
        expect_list(&mut store, "docs", vec![dirent("docs/readme.md", true)]);
        let mut app = App::new(Arc::new(store), false);
        settle().await;
        app.set_active_row(Some("docs".to_string()));

        // Act
        app.open_folder(&dirent("docs", false));
        let during = listing_snapshot(&app);
        settle().await;

        // Assert — loading shown while in flight, active row cleared
        assert_eq!(during, ListingState::Loading);
        assert_eq!(app.current_path, "docs");
        assert_eq!(app.active_row, None);
        assert_eq!(
            listing_snapshot(&app),
            ListingState::Ready(vec![dirent("docs/readme.md", true)])
        );
    }

    #[tokio::test]
    async fn test_stale_listing_result_is_discarded() {
        // Arrange — navigate twice before either listing lands
        let mut store = MockDirentStore::new();
        expect_list(&mut store, "", vec![dirent("stale-root", false)]);
        expect_list(&mut store, "a", vec![dirent("a/stale", true)]);
        expect_list(&mut store, "b", vec![dirent("b/fresh", true)]);
        let mut app = App::new(Arc::new(store), false);

        // Act
        app.open_folder(&dirent("a", false));
        app.open_folder(&dirent("b", false));
        settle().await;

        // Assert — only the listing for the final navigation applies
        assert_eq!(app.current_path, "b");
        assert_eq!(
            listing_snapshot(&app),
            ListingState::Ready(vec![dirent("b/fresh", true)])
        );
    }

    #[tokio::test]
    async fn test_delete_requires_privileged_context() {
        // Arrange
        let mut store = MockDirentStore::new();
        expect_list(&mut store, "", vec![dirent("doomed", false)]);
        store.expect_delete().times(0);
        let app = App::new(Arc::new(store), false);
        settle().await;

        // Act
        app.delete_dirent(&dirent("doomed", false));
        settle().await;

        // Assert
        assert_eq!(app.notice_text(), None);
    }

    #[tokio::test]
    async fn test_delete_reloads_listing_and_sets_notice() {
        // Arrange
        let mut store = MockDirentStore::new();
        let remaining = vec![dirent("kept.txt", true)];
        let reloaded = remaining.clone();
        store.expect_list_dir().times(2).returning(move |_| {
            let entries = reloaded.clone();
            Box::pin(async move { Ok(entries) })
        });
        store
            .expect_delete()
            .withf(|dirent| dirent.path == "doomed.txt")
            .times(1)
            .returning(|_| Box::pin(async move { Ok(()) }));
        let app = App::new(Arc::new(store), true);
        settle().await;

        // Act
        app.delete_dirent(&dirent("doomed.txt", true));
        settle().await;

        // Assert
        assert_eq!(app.notice_text(), Some("Deleted doomed.txt".to_string()));
        assert_eq!(listing_snapshot(&app), ListingState::Ready(remaining));
    }

    #[tokio::test]
    async fn test_delete_failure_sets_notice_without_reload() {
        // Arrange
        let mut store = MockDirentStore::new();
        store.expect_list_dir().times(1).returning(|_| {
            Box::pin(async move { Ok(vec![dirent("doomed", false)]) })
        });
        store.expect_delete().times(1).returning(|dirent| {
            Box::pin(async move { Err(StoreError::NotFound { path: dirent.path }) })
        });
        let app = App::new(Arc::new(store), true);
        settle().await;

        // Act
        app.delete_dirent(&dirent("doomed", false));
        settle().await;

        // Assert
        assert_eq!(
            app.notice_text(),
            Some("Delete failed: doomed: not found".to_string())
        );
    }

    #[tokio::test]
    async fn test_download_only_applies_to_files() {
        // Arrange
        let mut store = MockDirentStore::new();
        expect_list(&mut store, "", vec![dirent("docs", false)]);
        store.expect_download().times(0);
        let app = App::new(Arc::new(store), false);
        settle().await;

        // Act
        app.download_dirent(&dirent("docs", false));
        settle().await;

        // Assert
        assert_eq!(app.notice_text(), None);
    }

    #[tokio::test]
    async fn test_download_sets_destination_notice() {
        // Arrange
        let mut store = MockDirentStore::new();
        expect_list(&mut store, "", vec![dirent("report.csv", true)]);
        store
            .expect_download()
            .withf(|dirent| dirent.path == "report.csv")
            .times(1)
            .returning(|_| {
                Box::pin(async move { Ok(std::path::PathBuf::from("/downloads/report.csv")) })
            });
        let app = App::new(Arc::new(store), false);
        settle().await;

        // Act
        app.download_dirent(&dirent("report.csv", true));
        settle().await;

        // Assert
        assert_eq!(
            app.notice_text(),
            Some("Downloaded report.csv to /downloads/report.csv".to_string())
        );
    }

    #[tokio::test]
    async fn test_row_movement_follows_listing_order() {
        // Arrange
        let mut store = MockDirentStore::new();
        expect_list(
            &mut store,
            "",
            vec![dirent("docs", false), dirent("a.txt", true)],
        );
        let mut app = App::new(Arc::new(store), false);
        settle().await;

        // Act & Assert — first step lands on the first entry
        app.next_row();
        assert_eq!(app.active_row.as_deref(), Some("docs"));

        // Steps clamp at both ends
        app.next_row();
        app.next_row();
        assert_eq!(app.active_row.as_deref(), Some("a.txt"));
        app.previous_row();
        app.previous_row();
        assert_eq!(app.active_row.as_deref(), Some("docs"));
    }

    #[tokio::test]
    async fn test_ascend_walks_toward_root() {
        // Arrange
        let mut store = MockDirentStore::new();
        store
            .expect_list_dir()
            .returning(|_| Box::pin(async move { Ok(Vec::new()) }));
        let mut app = App::new(Arc::new(store), false);
        settle().await;
        app.open_folder(&dirent("docs", false));
        app.open_folder(&dirent("docs/guides", false));
        settle().await;

        // Act & Assert
        app.ascend();
        assert_eq!(app.current_path, "docs");
        app.ascend();
        assert_eq!(app.current_path, "");
        app.ascend();
        assert_eq!(app.current_path, "");
    }

    #[tokio::test]
    async fn test_active_dirent_resolves_by_path() {
        // Arrange
        let mut store = MockDirentStore::new();
        expect_list(&mut store, "", vec![dirent("docs", false)]);
        let mut app = App::new(Arc::new(store), false);
        settle().await;

        // Act & Assert — a path that left the listing resolves to nothing
        app.set_active_row(Some("docs".to_string()));
        assert_eq!(app.active_dirent(), Some(dirent("docs", false)));
        app.set_active_row(Some("gone".to_string()));
        assert_eq!(app.active_dirent(), None);
    }

    #[test]
    fn test_parent_path() {
        // Arrange & Act & Assert
        assert_eq!(parent_path("docs/guides/intro"), "docs/guides");
        assert_eq!(parent_path("docs"), "");
        assert_eq!(parent_path(""), "");
    }
}
