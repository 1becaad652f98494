//! Opened file handles.

use std::io::{self, Read, Seek, SeekFrom};
use std::sync::Arc;

use crate::entry::DirEntryInfo;

/// A readable handle over a file's bytes.
///
/// Each handle owns its own cursor over the shared contents, so two opens
/// of the same file read independently. Closing is a no-op that always
/// succeeds and may be repeated.
#[derive(Debug, Clone)]
pub struct MemFile {
    data: Arc<[u8]>,
    pos: usize,
    info: DirEntryInfo,
}

impl MemFile {
    pub(crate) fn new(data: Arc<[u8]>, name: impl Into<String>) -> Self {
        let info = DirEntryInfo::file(name, data.len() as u64);
        Self { data, pos: 0, info }
    }

    /// Base name the file was opened under.
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Info record for the opened file.
    pub fn stat(&self) -> DirEntryInfo {
        self.info.clone()
    }

    /// Total length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the file has no contents.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes not yet read.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Release the handle.
    pub fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for MemFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let start = self.pos.min(self.data.len());
        let n = buf.len().min(self.data.len() - start);
        buf[..n].copy_from_slice(&self.data[start..start + n]);
        self.pos = start + n;
        Ok(n)
    }
}

impl Seek for MemFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::End(delta) => (self.data.len() as u64).checked_add_signed(delta),
            SeekFrom::Current(delta) => (self.pos as u64).checked_add_signed(delta),
        };
        match target {
            Some(offset) => {
                self.pos = usize::try_from(offset).unwrap_or(usize::MAX);
                Ok(offset)
            }
            None => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "invalid seek to a negative position",
            )),
        }
    }
}
