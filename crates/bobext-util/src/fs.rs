use std::collections::HashSet;
use std::ffi::OsStr;
use std::hash::Hash;
use std::path::{Path, PathBuf};

/// Remove duplicates from `items`, keeping the first occurrence of each value.
///
/// The result is a subsequence of the input, and applying `uniq` twice gives
/// the same result as applying it once.
pub fn uniq<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Split a search-path list (`PATH` style) into directories.
///
/// Uses the platform separator (`:` on Unix, `;` on Windows). Empty entries
/// are dropped, so `"/a::/b:"` yields `["/a", "/b"]`.
pub fn split_search_path(value: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(value)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

/// Join `base` and a possibly empty `subpath`.
///
/// An empty subpath returns `base` unchanged instead of adding a trailing
/// separator.
pub fn join_subpath(base: &Path, subpath: &str) -> PathBuf {
    if subpath.is_empty() {
        base.to_path_buf()
    } else {
        base.join(subpath)
    }
}
