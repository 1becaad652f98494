//! Directory listing with implicit directory synthesis.

use std::collections::HashSet;

use crate::entry::{DirEntryInfo, Entry};
use crate::error::{FsError, FsResult};
use crate::fs::Table;
use crate::path::child_prefix;

/// List the direct children of a normalized directory key.
///
/// Rows directly under `key` are converted as-is. Deeper rows contribute
/// their first segment below `key` as a directory, once per name, unless
/// that name already has a row of its own. The result is sorted by name,
/// byte-wise.
///
/// Fails with `NotADirectory` if `key` is a file row, and with `NotFound`
/// if `key` is not the root and has neither a row nor descendants. The
/// root of an empty table lists as empty.
pub fn list_dir(table: &Table, key: &str) -> FsResult<Vec<DirEntryInfo>> {
    let explicit = match table.get(key) {
        Some(Entry::File(_)) => return Err(FsError::not_a_directory(key)),
        Some(Entry::Directory) => true,
        None => false,
    };

    let prefix = child_prefix(key);
    let mut result = Vec::new();
    let mut direct: HashSet<&str> = HashSet::new();
    let mut implicit: HashSet<&str> = HashSet::new();

    for (path, entry) in table {
        if path == key {
            continue;
        }
        let Some(suffix) = path.strip_prefix(prefix.as_str()) else {
            continue;
        };
        match suffix.split_once('/') {
            None if !suffix.is_empty() => {
                direct.insert(suffix);
                result.push(entry.to_info(suffix));
            }
            Some((dirname, _)) if !dirname.is_empty() => {
                implicit.insert(dirname);
            }
            _ => {}
        }
    }

    if !explicit && !key.is_empty() && direct.is_empty() && implicit.is_empty() {
        return Err(FsError::not_found(key));
    }

    let synthesized: Vec<&str> = implicit
        .into_iter()
        .filter(|name| !direct.contains(name))
        .collect();
    if !synthesized.is_empty() {
        tracing::debug!(key, count = synthesized.len(), "synthesized implicit directories");
    }
    result.extend(synthesized.into_iter().map(DirEntryInfo::directory));

    result.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, Entry)]) -> Table {
        rows.iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn names(entries: &[DirEntryInfo]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_implicit_directory_synthesis() {
        let t = table(&[("a/b/c", Entry::file(""))]);

        let entries = list_dir(&t, "a").unwrap();
        assert_eq!(entries, vec![DirEntryInfo::directory("b")]);

        let entries = list_dir(&t, "a/b").unwrap();
        assert_eq!(entries, vec![DirEntryInfo::file("c", 0)]);
    }

    #[test]
    fn test_dedup_under_multiple_descendants() {
        let t = table(&[
            ("a/b/x", Entry::file("")),
            ("a/b/c/y", Entry::file("")),
            ("a/b/c/z/w", Entry::file("")),
        ]);
        let entries = list_dir(&t, "a/b").unwrap();
        assert_eq!(
            entries,
            vec![DirEntryInfo::directory("c"), DirEntryInfo::file("x", 0)]
        );
    }

    #[test]
    fn test_explicit_dir_with_descendants_listed_once() {
        let t = table(&[("a/b", Entry::dir()), ("a/b/c", Entry::file("x"))]);
        let entries = list_dir(&t, "a").unwrap();
        assert_eq!(entries, vec![DirEntryInfo::directory("b")]);
    }

    #[test]
    fn test_byte_wise_sort() {
        let t = table(&[
            ("hello/world.txt", Entry::file("hello")),
            ("hello/golang.txt", Entry::file("foo")),
            ("hello/world/testfile.txt", Entry::file("bar")),
            ("hello/Zebra", Entry::file("")),
        ]);
        let entries = list_dir(&t, "hello").unwrap();
        assert_eq!(
            names(&entries),
            vec!["Zebra", "golang.txt", "world", "world.txt"]
        );
    }

    #[test]
    fn test_empty_table_root() {
        let t = Table::new();
        assert!(list_dir(&t, "").unwrap().is_empty());
    }

    #[test]
    fn test_empty_explicit_dir() {
        let t = table(&[("emptydir", Entry::dir())]);
        assert!(list_dir(&t, "emptydir").unwrap().is_empty());
        assert_eq!(names(&list_dir(&t, "").unwrap()), vec!["emptydir"]);
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let t = table(&[("a/b", Entry::file("x"))]);
        assert!(matches!(list_dir(&t, "a/b"), Err(FsError::NotADirectory(_))));
    }

    #[test]
    fn test_missing_dir_not_found() {
        let t = table(&[("a/b", Entry::file("x"))]);
        assert!(matches!(list_dir(&t, "nope"), Err(FsError::NotFound(_))));
        assert!(matches!(list_dir(&t, "a/bb"), Err(FsError::NotFound(_))));
    }

    #[test]
    fn test_root_skips_root_row() {
        let t = table(&[("", Entry::dir()), ("top", Entry::file("1"))]);
        assert_eq!(names(&list_dir(&t, "").unwrap()), vec!["top"]);
    }
}
