use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks `root` depth-first in file-name order and yields the absolute
/// path of every non-directory entry, with no extension filtering.
/// Directories are recursed into but never yielded themselves. A
/// traversal failure (e.g. permission denied) surfaces as an `Err` item;
/// entries yielded before it are unaffected.
pub fn walk(root: &Path) -> impl Iterator<Item = walkdir::Result<PathBuf>> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => {
                if entry.file_type().is_dir() {
                    None
                } else {
                    Some(Ok(to_absolute(entry.into_path())))
                }
            }
            Err(e) => Some(Err(e)),
        })
}

fn to_absolute(path: PathBuf) -> PathBuf {
    path.canonicalize().unwrap_or(path)
}
