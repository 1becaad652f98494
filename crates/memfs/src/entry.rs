//! Table entries and the info records derived from them.
//!
//! [`DirEntryInfo`] is serializable so listings and stat results can be
//! shipped over RPC or written into config.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::SystemTime;

/// Type bits for a directory, in `st_mode` layout.
pub const MODE_DIR: u32 = 0o040000;

/// Type bits for a regular file, in `st_mode` layout.
pub const MODE_REGULAR: u32 = 0o100000;

/// File type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    /// Regular file.
    File,
    /// Directory.
    Directory,
}

impl FileType {
    /// Returns true if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, FileType::File)
    }

    /// Returns true if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, FileType::Directory)
    }

    /// Type bits for this kind.
    pub fn mode(&self) -> u32 {
        match self {
            FileType::File => MODE_REGULAR,
            FileType::Directory => MODE_DIR,
        }
    }
}

/// A row in the table.
///
/// Files share their bytes through an `Arc`, so an opened file keeps
/// reading the contents it was opened with even if the row is later
/// replaced or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// File contents.
    File(Arc<[u8]>),
    /// Explicit marker for an otherwise empty directory.
    Directory,
}

impl Entry {
    /// Create a file entry from anything convertible to bytes.
    pub fn file(data: impl Into<Vec<u8>>) -> Self {
        Entry::File(Arc::from(data.into()))
    }

    /// Create a directory marker.
    pub fn dir() -> Self {
        Entry::Directory
    }

    /// Entry kind.
    pub fn kind(&self) -> FileType {
        match self {
            Entry::File(_) => FileType::File,
            Entry::Directory => FileType::Directory,
        }
    }

    /// Size in bytes; zero for directories.
    pub fn size(&self) -> u64 {
        match self {
            Entry::File(data) => data.len() as u64,
            Entry::Directory => 0,
        }
    }

    /// Returns true if this is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, Entry::File(_))
    }

    /// Returns true if this is a directory marker.
    pub fn is_dir(&self) -> bool {
        matches!(self, Entry::Directory)
    }

    /// Build the info record for this entry under `name`.
    pub fn to_info(&self, name: impl Into<String>) -> DirEntryInfo {
        DirEntryInfo::new(name, self.kind(), self.size())
    }
}

impl From<Vec<u8>> for Entry {
    fn from(data: Vec<u8>) -> Self {
        Entry::file(data)
    }
}

impl From<&[u8]> for Entry {
    fn from(data: &[u8]) -> Self {
        Entry::file(data)
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Entry::file(text)
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        Entry::file(text)
    }
}

/// Listing element and stat result.
///
/// Built fresh on every query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntryInfo {
    /// Entry name (not full path).
    pub name: String,
    /// Entry type.
    pub kind: FileType,
    /// Size in bytes (0 for directories).
    pub size: u64,
}

impl DirEntryInfo {
    /// Create a new info record.
    pub fn new(name: impl Into<String>, kind: FileType, size: u64) -> Self {
        Self {
            name: name.into(),
            kind,
            size,
        }
    }

    /// Create a file record.
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self::new(name, FileType::File, size)
    }

    /// Create a directory record.
    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(name, FileType::Directory, 0)
    }

    /// Returns true if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Returns true if this is a regular file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Type bits. Permissions are not modeled.
    pub fn mode(&self) -> u32 {
        self.kind.mode()
    }

    /// Modification time.
    ///
    /// Timestamps are not stored; this is always the current time.
    pub fn modified(&self) -> SystemTime {
        SystemTime::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type() {
        assert!(FileType::File.is_file());
        assert!(!FileType::File.is_dir());
        assert!(FileType::Directory.is_dir());
        assert_eq!(FileType::Directory.mode(), MODE_DIR);
        assert_eq!(FileType::File.mode(), MODE_REGULAR);
    }

    #[test]
    fn test_file_to_info() {
        let info = Entry::file("hello").to_info("world.txt");
        assert_eq!(info.name, "world.txt");
        assert!(info.is_file());
        assert_eq!(info.size, 5);
        assert_eq!(info.mode(), MODE_REGULAR);
    }

    #[test]
    fn test_dir_to_info() {
        let info = Entry::dir().to_info("emptydir");
        assert_eq!(info, DirEntryInfo::directory("emptydir"));
        assert!(info.is_dir());
        assert_eq!(info.size, 0);
        assert_eq!(info.mode() & MODE_DIR, MODE_DIR);
    }

    #[test]
    fn test_modified_is_current_time() {
        let before = SystemTime::now();
        let info = DirEntryInfo::file("f", 0);
        let first = info.modified();
        assert!(first >= before);
        assert!(info.modified() >= first);
    }

    #[test]
    fn test_entry_conversions() {
        assert_eq!(Entry::from("abc"), Entry::file(b"abc".to_vec()));
        assert_eq!(Entry::from(String::from("x")).size(), 1);
        assert!(Entry::from(&b""[..]).is_file());
    }
}
