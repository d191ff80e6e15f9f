/// One file-system entry (file or directory) in a listing.
///
/// `path` is the entry's store-relative path and serves as its stable
/// identity; rows and UI state are keyed by it, never by list position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dirent {
    /// Whether this entry is a file (as opposed to a directory).
    pub is_file: bool,
    /// Last modification time as unix seconds.
    pub mtime: i64,
    /// Display name, the last path segment.
    pub name: String,
    /// Store-relative path (e.g. `reports/2024/summary.csv`).
    pub path: String,
    /// Size in bytes. Meaningful for files only.
    pub size: u64,
}
