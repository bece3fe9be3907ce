//! The storage of the uploaded files.
//!
//! The paths given to a [`StorageBackend`] are relative to its root, as generated by
//! [`upload_path`](crate::upload::upload_path).

use std::{io, path::PathBuf};

use tokio::fs;

/// Trait for the storage of the uploaded files.
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Writes the data to the specified path, creating the missing directories.
    async fn write(&self, path: &str, data: &[u8]) -> io::Result<()>;

    /// Reads the data at the specified path.
    async fn read(&self, path: &str) -> io::Result<Vec<u8>>;

    /// Deletes the data at the specified path.
    ///
    /// Deleting a path that doesn't exist isn't an error.
    async fn delete(&self, path: &str) -> io::Result<()>;

    /// Checks if data exists at the specified path.
    async fn exists(&self, path: &str) -> io::Result<bool>;
}

/// Stores the uploaded files in a directory of the filesystem.
pub struct FilesystemBackend {
    root: PathBuf,
}

impl FilesystemBackend {
    /// Creates a new filesystem backend with the given root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

#[async_trait::async_trait]
impl StorageBackend for FilesystemBackend {
    async fn write(&self, path: &str, data: &[u8]) -> io::Result<()> {
        let full_path = self.full_path(path);
        tracing::debug!(storage_path = %path, size = data.len(), "write");

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = full_path.with_extension("tmp");
        fs::write(&temp_path, data).await?;
        fs::rename(&temp_path, &full_path).await
    }

    async fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(self.full_path(path)).await
    }

    async fn delete(&self, path: &str) -> io::Result<()> {
        match fs::remove_file(self.full_path(path)).await {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            res => res,
        }
    }

    async fn exists(&self, path: &str) -> io::Result<bool> {
        fs::try_exists(self.full_path(path)).await
    }
}

#[cfg(any(test, feature = "mock"))]
pub use memory::MemoryBackend;

#[cfg(any(test, feature = "mock"))]
mod memory {
    use std::{collections::HashMap, io};

    use tokio::sync::RwLock;

    use super::StorageBackend;

    /// Keeps the uploaded files in memory. Used for testing.
    #[derive(Default)]
    pub struct MemoryBackend {
        files: RwLock<HashMap<String, Vec<u8>>>,
    }

    impl MemoryBackend {
        /// Returns the amount of stored files.
        pub async fn len(&self) -> usize {
            self.files.read().await.len()
        }

        /// Returns whether there is no stored file.
        pub async fn is_empty(&self) -> bool {
            self.files.read().await.is_empty()
        }
    }

    #[async_trait::async_trait]
    impl StorageBackend for MemoryBackend {
        async fn write(&self, path: &str, data: &[u8]) -> io::Result<()> {
            self.files
                .write()
                .await
                .insert(path.to_owned(), data.to_owned());
            Ok(())
        }

        async fn read(&self, path: &str) -> io::Result<Vec<u8>> {
            self.files
                .read()
                .await
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.to_owned()))
        }

        async fn delete(&self, path: &str) -> io::Result<()> {
            self.files.write().await.remove(path);
            Ok(())
        }

        async fn exists(&self, path: &str) -> io::Result<bool> {
            Ok(self.files.read().await.contains_key(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FilesystemBackend, MemoryBackend, StorageBackend};

    #[tokio::test]
    async fn filesystem_delete_if_exists() -> std::io::Result<()> {
        let root = std::env::temp_dir().join(format!("website-storage-{}", uuid::Uuid::new_v4()));
        let storage = FilesystemBackend::new(&root);

        storage.write("trips/photos/a.jpg", b"jpeg").await?;
        assert!(storage.exists("trips/photos/a.jpg").await?);
        assert_eq!(storage.read("trips/photos/a.jpg").await?, b"jpeg");

        storage.delete("trips/photos/a.jpg").await?;
        assert!(!storage.exists("trips/photos/a.jpg").await?);
        // Already missing
        storage.delete("trips/photos/a.jpg").await?;
        // Other failures are reported
        assert!(storage.delete("trips/photos").await.is_err());

        tokio::fs::remove_dir_all(root).await
    }

    #[tokio::test]
    async fn memory_delete_if_exists() -> std::io::Result<()> {
        let storage = MemoryBackend::default();
        storage.write("events/a.png", b"png").await?;
        assert_eq!(storage.len().await, 1);
        storage.delete("events/a.png").await?;
        storage.delete("events/a.png").await?;
        assert!(storage.is_empty().await);
        assert!(storage.read("events/a.png").await.is_err());
        Ok(())
    }
}
