//! The in-memory filesystem.
//!
//! A flat table from normalized path to [`Entry`]. Directory structure is
//! derived from key prefixes on every query; there is no node tree to keep
//! consistent, so the owner may mutate the table freely between calls.

use std::collections::HashMap;

use crate::entry::{DirEntryInfo, Entry};
use crate::error::{FsError, FsResult};
use crate::file::MemFile;
use crate::listing::list_dir;
use crate::ops::ReadFs;
use crate::path::{basename, normalize};
use crate::resolve::{resolve, Resolution};

/// Backing table: normalized key to entry.
pub type Table = HashMap<String, Entry>;

/// In-memory filesystem over a flat path table.
///
/// Not synchronized. Wrap it in [`SharedMemFs`](crate::SharedMemFs) or
/// your own lock when mutating from another thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemFs {
    entries: Table,
}

impl MemFs {
    /// Create a new empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing table. Keys are used as-is and must already be
    /// normalized.
    pub fn from_table(entries: Table) -> Self {
        Self { entries }
    }

    /// Insert or overwrite the entry at `path`, returning the old one.
    pub fn insert(&mut self, path: &str, entry: impl Into<Entry>) -> Option<Entry> {
        self.entries.insert(normalize(path), entry.into())
    }

    /// Remove the row at `path`. Descendant rows are left in place.
    pub fn remove(&mut self, path: &str) -> Option<Entry> {
        self.entries.remove(&normalize(path))
    }

    /// Get the explicit row at `path`, if any.
    pub fn get(&self, path: &str) -> Option<&Entry> {
        self.entries.get(&normalize(path))
    }

    /// Borrow the backing table.
    pub fn entries(&self) -> &Table {
        &self.entries
    }

    /// Mutably borrow the backing table. Keys inserted here bypass
    /// normalization.
    pub fn entries_mut(&mut self) -> &mut Table {
        &mut self.entries
    }

    /// Consume into the backing table.
    pub fn into_table(self) -> Table {
        self.entries
    }

    /// Number of explicit rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a path against the table.
    ///
    /// The root always exists, so it resolves as an implicit directory
    /// even when the table is empty.
    pub fn resolve(&self, path: &str) -> (String, Resolution<'_>) {
        let key = normalize(path);
        let resolution = match resolve(&self.entries, &key) {
            Resolution::Absent if key.is_empty() => Resolution::ImplicitDir,
            other => other,
        };
        (key, resolution)
    }
}

impl ReadFs for MemFs {
    fn open(&self, path: &str) -> FsResult<MemFile> {
        let (key, resolution) = self.resolve(path);
        tracing::trace!(path, %key, "open");

        match resolution {
            Resolution::File(Entry::File(data)) => Ok(MemFile::new(data.clone(), basename(&key))),
            Resolution::Absent => Err(FsError::not_found(&key)),
            _ => Err(FsError::is_a_directory(&key)),
        }
    }

    fn stat(&self, path: &str) -> FsResult<DirEntryInfo> {
        let (key, resolution) = self.resolve(path);
        tracing::trace!(path, %key, "stat");

        let name = basename(&key);
        match resolution {
            Resolution::File(entry) => Ok(entry.to_info(name)),
            Resolution::ExplicitDir | Resolution::ImplicitDir => {
                Ok(DirEntryInfo::directory(name))
            }
            Resolution::Absent => Err(FsError::not_found(&key)),
        }
    }

    fn read_dir(&self, path: &str) -> FsResult<Vec<DirEntryInfo>> {
        let key = normalize(path);
        tracing::trace!(path, %key, "read_dir");
        list_dir(&self.entries, &key)
    }
}

impl<K: AsRef<str>, E: Into<Entry>> FromIterator<(K, E)> for MemFs {
    fn from_iter<I: IntoIterator<Item = (K, E)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(path, entry)| (normalize(path.as_ref()), entry.into()))
            .collect();
        Self { entries }
    }
}

impl<K: AsRef<str>, E: Into<Entry>> Extend<(K, E)> for MemFs {
    fn extend<I: IntoIterator<Item = (K, E)>>(&mut self, iter: I) {
        for (path, entry) in iter {
            self.insert(path.as_ref(), entry);
        }
    }
}

impl From<Table> for MemFs {
    fn from(entries: Table) -> Self {
        Self::from_table(entries)
    }
}
