//! RON tree manifests.
//!
//! A manifest describes a tree declaratively:
//!
//! ```ron
//! {
//!     "assets/readme.txt": Text("hello"),
//!     "assets/logo.bin": Base64("iVBORw0KGgo="),
//!     "cache": Dir,
//! }
//! ```

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::entry::Entry;
use crate::fs::MemFs;

/// One row of a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManifestEntry {
    /// UTF-8 file contents.
    Text(String),
    /// Binary file contents, standard base64.
    Base64(String),
    /// Empty directory marker.
    Dir,
}

impl ManifestEntry {
    fn into_entry(self) -> Result<Entry, ManifestError> {
        match self {
            ManifestEntry::Text(text) => Ok(Entry::file(text)),
            ManifestEntry::Base64(encoded) => Ok(Entry::file(STANDARD.decode(encoded)?)),
            ManifestEntry::Dir => Ok(Entry::dir()),
        }
    }
}

/// Path to entry mapping, as written in RON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub entries: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    /// Parse a manifest from RON text.
    pub fn parse(text: &str) -> Result<Self, ManifestError> {
        Ok(ron::from_str(text)?)
    }

    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let manifest = Self::parse(&text)?;
        tracing::debug!(path = %path.display(), entries = manifest.entries.len(), "loaded manifest");
        Ok(manifest)
    }

    /// Build the filesystem. When several paths normalize to the same key,
    /// the one sorting last wins.
    pub fn into_fs(self) -> Result<MemFs, ManifestError> {
        let mut fs = MemFs::new();
        for (path, entry) in self.entries {
            fs.insert(&path, entry.into_entry()?);
        }
        Ok(fs)
    }
}

impl MemFs {
    /// Build a filesystem from RON manifest text.
    pub fn from_manifest(text: &str) -> Result<Self, ManifestError> {
        Manifest::parse(text)?.into_fs()
    }
}

/// Error type for manifest loading.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}
