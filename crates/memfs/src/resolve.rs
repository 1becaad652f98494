//! Key resolution against the flat table.

use crate::entry::Entry;
use crate::fs::Table;
use crate::path::child_prefix;

/// What a normalized key denotes in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// An explicit file row.
    File(&'a Entry),
    /// An explicit directory marker row.
    ExplicitDir,
    /// No row of its own, but at least one row nested beneath it.
    ImplicitDir,
    /// Nothing at or under this key.
    Absent,
}

impl Resolution<'_> {
    /// Returns true for explicit and implicit directories.
    pub fn is_dir(&self) -> bool {
        matches!(self, Resolution::ExplicitDir | Resolution::ImplicitDir)
    }

    /// Returns true if the key denotes anything at all.
    pub fn exists(&self) -> bool {
        !matches!(self, Resolution::Absent)
    }
}

/// Resolve a normalized key.
///
/// An explicit row wins. Otherwise the key is an implicit directory when
/// some row has a non-empty remainder after the key's child prefix; for
/// the root that means any non-empty key at all.
pub fn resolve<'a>(table: &'a Table, key: &str) -> Resolution<'a> {
    if let Some(entry) = table.get(key) {
        return match entry {
            Entry::File(_) => Resolution::File(entry),
            Entry::Directory => Resolution::ExplicitDir,
        };
    }

    if has_descendants(table, key) {
        Resolution::ImplicitDir
    } else {
        Resolution::Absent
    }
}

/// Returns true if any row is nested beneath `key`.
pub(crate) fn has_descendants(table: &Table, key: &str) -> bool {
    let prefix = child_prefix(key);
    table.keys().any(|path| {
        path.strip_prefix(prefix.as_str())
            .is_some_and(|rest| !rest.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, Entry)]) -> Table {
        rows.iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_explicit_rows() {
        let t = table(&[("a/f", Entry::file("x")), ("a/d", Entry::dir())]);
        assert!(matches!(resolve(&t, "a/f"), Resolution::File(Entry::File(_))));
        assert_eq!(resolve(&t, "a/d"), Resolution::ExplicitDir);
    }

    #[test]
    fn test_implicit_dir() {
        let t = table(&[("a/b/c", Entry::file(""))]);
        assert_eq!(resolve(&t, "a"), Resolution::ImplicitDir);
        assert_eq!(resolve(&t, "a/b"), Resolution::ImplicitDir);
        assert_eq!(resolve(&t, ""), Resolution::ImplicitDir);
    }

    #[test]
    fn test_prefix_is_segment_aligned() {
        let t = table(&[("abc/d", Entry::file(""))]);
        assert_eq!(resolve(&t, "ab"), Resolution::Absent);
        assert_eq!(resolve(&t, "abc"), Resolution::ImplicitDir);
    }

    #[test]
    fn test_absent() {
        let t = table(&[("a/b", Entry::file(""))]);
        assert_eq!(resolve(&t, "x"), Resolution::Absent);
        assert_eq!(resolve(&t, "a/b/c"), Resolution::Absent);
        assert!(!resolve(&t, "x").exists());
    }

    #[test]
    fn test_empty_table_root_is_absent() {
        let t = Table::new();
        assert_eq!(resolve(&t, ""), Resolution::Absent);
    }

    #[test]
    fn test_explicit_root_row() {
        let t = table(&[("", Entry::dir())]);
        assert_eq!(resolve(&t, ""), Resolution::ExplicitDir);
        assert!(resolve(&t, "").is_dir());
    }
}
