//! Lock-wrapped filesystem for concurrent owners.
//!
//! The core never synchronizes. `SharedMemFs` holds the table behind a
//! `parking_lot::RwLock`: readers take the read lock for exactly one
//! operation, the owner takes the write lock to mutate.

use async_trait::async_trait;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

use crate::entry::{DirEntryInfo, Entry};
use crate::error::{FsError, FsResult};
use crate::file::MemFile;
use crate::fs::MemFs;
use crate::ops::{ReadFs, VfsOps};
use crate::resolve::Resolution;

/// Cheaply cloneable handle to a locked [`MemFs`].
#[derive(Debug, Clone, Default)]
pub struct SharedMemFs {
    inner: Arc<RwLock<MemFs>>,
}

impl SharedMemFs {
    /// Wrap a filesystem.
    pub fn new(fs: MemFs) -> Self {
        Self {
            inner: Arc::new(RwLock::new(fs)),
        }
    }

    /// Take the read lock.
    pub fn read_guard(&self) -> RwLockReadGuard<'_, MemFs> {
        self.inner.read()
    }

    /// Take the write lock for direct mutation.
    pub fn write_guard(&self) -> RwLockWriteGuard<'_, MemFs> {
        self.inner.write()
    }

    /// Insert or overwrite a row under the write lock.
    pub fn insert(&self, path: &str, entry: impl Into<Entry>) -> Option<Entry> {
        self.inner.write().insert(path, entry)
    }

    /// Remove a row under the write lock.
    pub fn remove(&self, path: &str) -> Option<Entry> {
        self.inner.write().remove(path)
    }

    /// Copy of the current table.
    pub fn snapshot(&self) -> MemFs {
        self.inner.read().clone()
    }
}

impl From<MemFs> for SharedMemFs {
    fn from(fs: MemFs) -> Self {
        Self::new(fs)
    }
}

impl ReadFs for SharedMemFs {
    fn open(&self, path: &str) -> FsResult<MemFile> {
        self.inner.read().open(path)
    }

    fn stat(&self, path: &str) -> FsResult<DirEntryInfo> {
        self.inner.read().stat(path)
    }

    fn read_dir(&self, path: &str) -> FsResult<Vec<DirEntryInfo>> {
        self.inner.read().read_dir(path)
    }
}

#[async_trait]
impl VfsOps for SharedMemFs {
    async fn getattr(&self, path: &str) -> FsResult<DirEntryInfo> {
        self.stat(path)
    }

    async fn readdir(&self, path: &str) -> FsResult<Vec<DirEntryInfo>> {
        self.read_dir(path)
    }

    async fn read(&self, path: &str, offset: u64, size: u32) -> FsResult<Vec<u8>> {
        let fs = self.inner.read();
        let (key, resolution) = fs.resolve(path);
        match resolution {
            Resolution::File(Entry::File(data)) => {
                let start = usize::try_from(offset).unwrap_or(usize::MAX).min(data.len());
                let end = start.saturating_add(size as usize).min(data.len());
                Ok(data[start..end].to_vec())
            }
            Resolution::Absent => Err(FsError::not_found(&key)),
            _ => Err(FsError::is_a_directory(&key)),
        }
    }
}
