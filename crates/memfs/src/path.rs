//! Path keys.
//!
//! Every path handed to the filesystem is cleaned lexically into a key:
//! `/`-separated, no leading or trailing `/`, no empty, `.` or `..`
//! segments. The root is the empty string. Paths are always treated as
//! rooted, so `..` at the top is dropped rather than kept.

/// Normalize an arbitrary path string into a lookup key.
///
/// Total and idempotent: `normalize(&normalize(p)) == normalize(p)`.
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}

/// Last segment of a normalized key, or `.` for the root.
pub fn basename(key: &str) -> &str {
    if key.is_empty() {
        return ".";
    }
    key.rsplit_once('/').map_or(key, |(_, name)| name)
}

/// Join a child name onto a normalized directory key.
pub fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

/// The prefix every descendant key of `key` starts with.
///
/// Empty for the root, since every key descends from it.
pub(crate) fn child_prefix(key: &str) -> String {
    if key.is_empty() {
        String::new()
    } else {
        format!("{}/", key)
    }
}
