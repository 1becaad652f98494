//! Filesystem error types.

use std::io;
use thiserror::Error;

/// Error returned by the read-only access contract.
///
/// Every variant carrying a `String` holds the normalized key that failed,
/// with the root shown as `.`.
#[derive(Debug, Error)]
pub enum FsError {
    /// No explicit or implicit entry at this path.
    #[error("not found: {0}")]
    NotFound(String),

    /// Listing was requested on a file.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// Open was requested on a directory.
    #[error("is a directory: {0}")]
    IsADirectory(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl FsError {
    /// Create a NotFound error.
    pub fn not_found(key: &str) -> Self {
        Self::NotFound(display_key(key))
    }

    /// Create a NotADirectory error.
    pub fn not_a_directory(key: &str) -> Self {
        Self::NotADirectory(display_key(key))
    }

    /// Create an IsADirectory error.
    pub fn is_a_directory(key: &str) -> Self {
        Self::IsADirectory(display_key(key))
    }

    /// Returns true if this error means the path does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

fn display_key(key: &str) -> String {
    if key.is_empty() {
        ".".to_string()
    } else {
        key.to_string()
    }
}

/// Convert FsError to std::io::Error for compatibility.
impl From<FsError> for io::Error {
    fn from(e: FsError) -> Self {
        match e {
            FsError::NotFound(msg) => io::Error::new(io::ErrorKind::NotFound, msg),
            FsError::NotADirectory(msg) => io::Error::new(io::ErrorKind::NotADirectory, msg),
            FsError::IsADirectory(msg) => io::Error::new(io::ErrorKind::IsADirectory, msg),
            FsError::Io(e) => e,
        }
    }
}

/// Filesystem result type.
pub type FsResult<T> = Result<T, FsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_displays_as_dot() {
        let err = FsError::not_found("");
        assert_eq!(err.to_string(), "not found: .");

        let err = FsError::is_a_directory("a/b");
        assert_eq!(err.to_string(), "is a directory: a/b");
    }

    #[test]
    fn test_io_error_kinds() {
        let io: io::Error = FsError::not_found("x").into();
        assert_eq!(io.kind(), io::ErrorKind::NotFound);

        let io: io::Error = FsError::not_a_directory("x").into();
        assert_eq!(io.kind(), io::ErrorKind::NotADirectory);

        let io: io::Error = FsError::is_a_directory("x").into();
        assert_eq!(io.kind(), io::ErrorKind::IsADirectory);
    }
}
