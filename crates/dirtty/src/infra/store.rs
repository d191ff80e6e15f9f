use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use thiserror::Error;

use crate::domain::dirent::Dirent;

/// Boxed async result used by [`DirentStore`] trait methods.
pub type StoreFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Failures raised by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested entry does not exist in the store.
    #[error("{path}: not found")]
    NotFound {
        /// Store-relative path of the missing entry.
        path: String,
    },
    /// The path tried to escape the store root.
    #[error("{path}: path is outside the store root")]
    OutsideRoot {
        /// Offending store-relative path.
        path: String,
    },
    /// An underlying I/O operation failed.
    #[error("{context}: {source}")]
    Io {
        /// What the store was doing when the failure occurred.
        context: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Async storage boundary used by app orchestration code.
///
/// Production uses [`LocalStore`](crate::infra::local_store::LocalStore),
/// while tests inject `MockDirentStore` to drive the app without touching
/// a real filesystem.
#[cfg_attr(test, mockall::automock)]
pub trait DirentStore: Send + Sync {
    /// Lists the entries directly under the store-relative `path`
    /// (empty string = store root) in display order.
    fn list_dir(&self, path: String) -> StoreFuture<Result<Vec<Dirent>, StoreError>>;

    /// Permanently deletes `dirent` (recursively for directories).
    fn delete(&self, dirent: Dirent) -> StoreFuture<Result<(), StoreError>>;

    /// Exports the file `dirent` to the operator's download directory and
    /// returns the destination path.
    fn download(&self, dirent: Dirent) -> StoreFuture<Result<PathBuf, StoreError>>;
}
