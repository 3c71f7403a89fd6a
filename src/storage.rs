//! File storage backing the `/files` routes.
//!
//! Storage is a flat namespace keyed by file name. Only whole file read and whole file overwrite
//! are performed, there is no locking, concurrent writes to the same name are last writer wins.
use bytes::Bytes;
use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

/// Whole file storage.
pub trait Storage: Send + Sync + 'static {
    /// Read the whole content of a file.
    ///
    /// A missing file must be reported with [`io::ErrorKind::NotFound`].
    fn read(&self, name: &str) -> impl Future<Output = io::Result<Bytes>> + Send;

    /// Create or overwrite a file with the given content.
    fn write(&self, name: &str, contents: Bytes) -> impl Future<Output = io::Result<()>> + Send;
}

/// [`Storage`] on a directory of the local file system.
#[derive(Debug, Clone)]
pub struct DirStorage {
    root: Arc<Path>,
}

impl DirStorage {
    /// Create storage rooted at `root`.
    ///
    /// The directory is not required to exist, it is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into().into() }
    }

    /// Returns the storage root directory.
    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl Storage for DirStorage {
    fn read(&self, name: &str) -> impl Future<Output = io::Result<Bytes>> + Send {
        let path = self.path(name);
        async move { tokio::fs::read(path).await.map(Bytes::from) }
    }

    fn write(&self, name: &str, contents: Bytes) -> impl Future<Output = io::Result<()>> + Send {
        let path = self.path(name);
        async move {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, contents).await
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_dir_storage() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DirStorage::new(dir.path().join("nested").join("data"));

        let err = storage.read("missing.txt").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        storage.write("foo.txt", Bytes::from_static(b"first")).await.unwrap();
        assert_eq!(storage.read("foo.txt").await.unwrap(), "first");

        storage.write("foo.txt", Bytes::from_static(b"second")).await.unwrap();
        assert_eq!(storage.read("foo.txt").await.unwrap(), "second");

        assert!(storage.root().join("foo.txt").is_file());
    }
}
