//! In-memory, read-mostly filesystem.
//!
//! A [`MemFs`] is a flat table from path key to [`Entry`], consumed through
//! the [`ReadFs`] access contract (open, stat, list by path). It stands in
//! wherever a filesystem is expected: embedded assets, tests, synthetic
//! trees.
//!
//! ## Design Decisions
//!
//! - **Flat table, derived tree**: directories exist explicitly (a
//!   [`Entry::Directory`] row) or implicitly (some deeper key shares the
//!   prefix). Listings are recomputed from key prefixes on every call.
//! - **Owner mutates, core reads**: there are no write operations in the
//!   access contract. The owner edits the table directly between calls.
//! - **No locking in the core**: [`SharedMemFs`] adds a read-write lock
//!   for owners that mutate concurrently.
//!
//! ```
//! use memfs::{Entry, MemFs, ReadFs};
//!
//! let mut fs = MemFs::new();
//! fs.insert("hello/world.txt", "hello");
//! fs.insert("empty", Entry::dir());
//!
//! assert_eq!(fs.read_file("./hello/../hello/world.txt").unwrap(), b"hello");
//! let names: Vec<_> = fs.read_dir("/").unwrap().into_iter().map(|e| e.name).collect();
//! assert_eq!(names, ["empty", "hello"]);
//! ```

mod entry;
mod error;
mod file;
mod fs;
mod listing;
mod manifest;
mod ops;
pub mod path;
mod resolve;
mod shared;
mod walk;

pub use entry::{DirEntryInfo, Entry, FileType, MODE_DIR, MODE_REGULAR};
pub use error::{FsError, FsResult};
pub use file::MemFile;
pub use fs::{MemFs, Table};
pub use listing::list_dir;
pub use manifest::{Manifest, ManifestEntry, ManifestError};
pub use ops::{ReadFs, VfsOps};
pub use resolve::{resolve, Resolution};
pub use shared::SharedMemFs;
pub use walk::walk;
