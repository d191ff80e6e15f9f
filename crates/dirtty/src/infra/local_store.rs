use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::time::UNIX_EPOCH;

use tracing::warn;

use crate::domain::dirent::Dirent;
use crate::infra::store::{DirentStore, StoreError, StoreFuture};

/// Local-filesystem store adapter.
///
/// Serves one directory tree rooted at `root`. All store-relative paths
/// are resolved against it and must stay inside it; `download` exports
/// files into `download_dir`.
pub struct LocalStore {
    download_dir: PathBuf,
    root: PathBuf,
}

impl LocalStore {
    /// Creates a store over `root` that exports downloads to `download_dir`.
    pub fn new(root: PathBuf, download_dir: PathBuf) -> Self {
        Self { download_dir, root }
    }

    /// Resolves a store-relative path against the root.
    ///
    /// Rejects any path with non-normal components (`..`, absolute
    /// prefixes) so listings can never escape the root.
    fn resolve(&self, path: &str) -> Result<PathBuf, StoreError> {
        let relative = Path::new(path);
        if relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)))
        {
            return Err(StoreError::OutsideRoot {
                path: path.to_string(),
            });
        }

        Ok(self.root.join(relative))
    }
}

impl DirentStore for LocalStore {
    fn list_dir(&self, path: String) -> StoreFuture<Result<Vec<Dirent>, StoreError>> {
        let resolved = self.resolve(&path);

        Box::pin(async move {
            let dir = resolved?;
            let mut reader = tokio::fs::read_dir(&dir)
                .await
                .map_err(|source| io_error("listing", &path, source))?;

            let mut entries = Vec::new();
            while let Some(entry) = reader
                .next_entry()
                .await
                .map_err(|source| io_error("listing", &path, source))?
            {
                let name = entry.file_name().to_string_lossy().to_string();
                let metadata = match entry.metadata().await {
                    Ok(metadata) => metadata,
                    Err(error) => {
                        warn!(name, %error, "skipping unreadable entry");
                        continue;
                    }
                };

                entries.push(Dirent {
                    is_file: !metadata.is_dir(),
                    mtime: unix_mtime(&metadata),
                    name: name.clone(),
                    path: join_store_path(&path, &name),
                    size: metadata.len(),
                });
            }

            sort_entries(&mut entries);

            Ok(entries)
        })
    }

    fn delete(&self, dirent: Dirent) -> StoreFuture<Result<(), StoreError>> {
        let resolved = self.resolve(&dirent.path);

        Box::pin(async move {
            let target = resolved?;
            let removal = if dirent.is_file {
                tokio::fs::remove_file(&target).await
            } else {
                tokio::fs::remove_dir_all(&target).await
            };

            removal.map_err(|source| {
                warn!(path = %dirent.path, %source, "delete failed");
                io_error("deleting", &dirent.path, source)
            })
        })
    }

    fn download(&self, dirent: Dirent) -> StoreFuture<Result<PathBuf, StoreError>> {
        let resolved = self.resolve(&dirent.path);
        let download_dir = self.download_dir.clone();

        Box::pin(async move {
            let source_path = resolved?;
            tokio::fs::create_dir_all(&download_dir)
                .await
                .map_err(|source| io_error("downloading", &dirent.path, source))?;

            let destination = download_dir.join(&dirent.name);
            tokio::fs::copy(&source_path, &destination)
                .await
                .map_err(|source| {
                    warn!(path = %dirent.path, %source, "download failed");
                    io_error("downloading", &dirent.path, source)
                })?;

            Ok(destination)
        })
    }
}

/// Directories first, then lexical name order within each group.
fn sort_entries(entries: &mut [Dirent]) {
    entries.sort_by(|first, second| {
        first
            .is_file
            .cmp(&second.is_file)
            .then_with(|| first.name.cmp(&second.name))
    });
}

fn join_store_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

fn unix_mtime(metadata: &std::fs::Metadata) -> i64 {
    metadata
        .modified()
        .ok()
        .and_then(|modified| modified.duration_since(UNIX_EPOCH).ok())
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX)
        })
}

fn io_error(context: &str, path: &str, source: std::io::Error) -> StoreError {
    if source.kind() == ErrorKind::NotFound {
        StoreError::NotFound {
            path: path.to_string(),
        }
    } else {
        StoreError::Io {
            context: format!("{context} {path}"),
            source,
        }
    }
}
