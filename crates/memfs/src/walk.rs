//! Tree traversal over any [`ReadFs`].

use crate::entry::DirEntryInfo;
use crate::error::FsResult;
use crate::ops::ReadFs;
use crate::path::{join, normalize};

/// Walk the tree under `root` in lexical pre-order.
///
/// Yields `(key, info)` pairs; the root itself comes first, under its
/// normalized key. Only `stat` and `read_dir` are used, so implicit
/// directories are walked like explicit ones.
pub fn walk<F: ReadFs + ?Sized>(fs: &F, root: &str) -> FsResult<Vec<(String, DirEntryInfo)>> {
    let key = normalize(root);
    let info = fs.stat(&key)?;
    let mut out = Vec::new();
    let is_dir = info.is_dir();
    out.push((key.clone(), info));
    if is_dir {
        walk_children(fs, &key, &mut out)?;
    }
    Ok(out)
}

fn walk_children<F: ReadFs + ?Sized>(
    fs: &F,
    dir: &str,
    out: &mut Vec<(String, DirEntryInfo)>,
) -> FsResult<()> {
    for child in fs.read_dir(dir)? {
        let path = join(dir, &child.name);
        let is_dir = child.is_dir();
        out.push((path.clone(), child));
        if is_dir {
            walk_children(fs, &path, out)?;
        }
    }
    Ok(())
}
