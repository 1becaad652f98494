//! Filesystem access traits.
//!
//! [`ReadFs`] is the synchronous access contract the table is consumed
//! through: open, stat and list by path. [`VfsOps`] is the async,
//! offset-based variant for consumers that live on an async runtime.

use async_trait::async_trait;
use std::io::Read;

use crate::entry::DirEntryInfo;
use crate::error::{FsError, FsResult};
use crate::file::MemFile;
use crate::path::normalize;

/// Read-only filesystem access by path.
///
/// Paths may be arbitrarily dirty; implementations normalize them before
/// lookup.
pub trait ReadFs {
    /// Open a file for reading.
    ///
    /// Fails with `NotFound` if nothing exists at the path and with
    /// `IsADirectory` if the path is a directory, explicit or implicit.
    fn open(&self, path: &str) -> FsResult<MemFile>;

    /// Get the info record for a file or directory.
    fn stat(&self, path: &str) -> FsResult<DirEntryInfo>;

    /// List the direct children of a directory, sorted by name.
    fn read_dir(&self, path: &str) -> FsResult<Vec<DirEntryInfo>>;

    /// Read entire file contents.
    fn read_file(&self, path: &str) -> FsResult<Vec<u8>> {
        let mut file = self.open(path)?;
        let mut data = Vec::with_capacity(file.len());
        file.read_to_end(&mut data)?;
        file.close()?;
        Ok(data)
    }

    /// Check if a path exists.
    fn exists(&self, path: &str) -> bool {
        self.stat(path).is_ok()
    }
}

impl<T: ReadFs + ?Sized> ReadFs for &T {
    fn open(&self, path: &str) -> FsResult<MemFile> {
        (**self).open(path)
    }

    fn stat(&self, path: &str) -> FsResult<DirEntryInfo> {
        (**self).stat(path)
    }

    fn read_dir(&self, path: &str) -> FsResult<Vec<DirEntryInfo>> {
        (**self).read_dir(path)
    }
}

/// An absent table behaves as if nothing exists, root included.
impl<T: ReadFs> ReadFs for Option<T> {
    fn open(&self, path: &str) -> FsResult<MemFile> {
        match self {
            Some(fs) => fs.open(path),
            None => Err(absent(path)),
        }
    }

    fn stat(&self, path: &str) -> FsResult<DirEntryInfo> {
        match self {
            Some(fs) => fs.stat(path),
            None => Err(absent(path)),
        }
    }

    fn read_dir(&self, path: &str) -> FsResult<Vec<DirEntryInfo>> {
        match self {
            Some(fs) => fs.read_dir(path),
            None => Err(absent(path)),
        }
    }
}

fn absent(path: &str) -> FsError {
    FsError::not_found(&normalize(path))
}

/// Async read-only VFS operations.
///
/// Designed for RPC (path-based, explicit offset/size, no handle state).
#[async_trait]
pub trait VfsOps: Send + Sync {
    /// Get file attributes.
    async fn getattr(&self, path: &str) -> FsResult<DirEntryInfo>;

    /// Read directory entries.
    async fn readdir(&self, path: &str) -> FsResult<Vec<DirEntryInfo>>;

    /// Read file contents.
    ///
    /// Reads up to `size` bytes starting at `offset`.
    /// Returns fewer bytes if EOF is reached.
    async fn read(&self, path: &str, offset: u64, size: u32) -> FsResult<Vec<u8>>;

    /// Check if a path exists.
    async fn exists(&self, path: &str) -> bool {
        self.getattr(path).await.is_ok()
    }

    /// Read entire file contents.
    async fn read_all(&self, path: &str) -> FsResult<Vec<u8>> {
        let attr = self.getattr(path).await?;
        let size = u32::try_from(attr.size).unwrap_or(u32::MAX);
        self.read(path, 0, size).await
    }
}
