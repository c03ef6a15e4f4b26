//! Glob-based file search over ordered search roots.

use std::path::{Path, PathBuf};

use bobext_core::config::SearchConfig;
use bobext_core::platform::Platform;
use bobext_util::fs::join_subpath;
use bobext_util::uniq;
use glob::MatchOptions;

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Prefix roots for the current process: configured prefixes, then the
/// platform's.
pub fn default_prefix_roots() -> Vec<PathBuf> {
    SearchConfig::resolve().prefix_roots(Platform::current())
}

/// Header roots for the current process.
pub fn default_include_roots() -> Vec<PathBuf> {
    SearchConfig::resolve().include_roots(Platform::current())
}

/// Library roots for the current process.
pub fn default_library_roots() -> Vec<PathBuf> {
    SearchConfig::resolve().library_roots(Platform::current())
}

/// Find files named `name` under every `root` joined with every `subpath`.
///
/// `name`, the roots and the subpaths may all contain glob wildcards.
/// Results follow (root, subpath) order, and alphabetical order within one
/// directory. An empty `subpaths` slice searches the roots themselves.
/// Directories are skipped. Repeated roots and subpaths are searched once.
/// A file reachable through two different roots is reported twice; callers
/// can pass the result through [`uniq`] if that matters.
pub fn find_file<P: AsRef<Path>>(name: &str, roots: &[P], subpaths: &[&str]) -> Vec<PathBuf> {
    let roots: Vec<&Path> = uniq(roots.iter().map(AsRef::as_ref));
    let subpaths: Vec<&str> = if subpaths.is_empty() {
        vec![""]
    } else {
        uniq(subpaths.iter().copied())
    };

    let mut found = Vec::new();
    for root in &roots {
        for subpath in &subpaths {
            let candidate = join_subpath(root, subpath).join(name);
            found.extend(expand(&candidate));
        }
    }
    tracing::debug!("find_file({name}): {} match(es)", found.len());
    found
}

/// [`find_file`] over the default prefix roots.
pub fn find_file_default(name: &str, subpaths: &[&str]) -> Vec<PathBuf> {
    find_file(name, &default_prefix_roots(), subpaths)
}

/// Find a header under the default include roots.
///
/// `find_header("blitz/array.h", &[])` finds the same files as
/// `find_file_default("array.h", &["include/blitz"])`.
pub fn find_header(name: &str, subpaths: &[&str]) -> Vec<PathBuf> {
    find_header_in(name, &default_include_roots(), subpaths)
}

/// Find a header under explicit include roots.
pub fn find_header_in<P: AsRef<Path>>(name: &str, roots: &[P], subpaths: &[&str]) -> Vec<PathBuf> {
    find_file(name, roots, subpaths)
}

/// Expand one candidate pattern into the existing non-directory paths it
/// names.
fn expand(candidate: &Path) -> Vec<PathBuf> {
    let Some(pattern) = candidate.to_str() else {
        tracing::warn!("Skipping non UTF-8 search path {}", candidate.display());
        return Vec::new();
    };
    tracing::trace!("Searching {pattern}");

    let entries = match glob::glob_with(pattern, GLOB_OPTIONS) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Skipping invalid search pattern {pattern}: {e}");
            return Vec::new();
        }
    };

    let matches = entries.filter_map(|entry| match entry {
        Ok(path) if path.is_dir() => None,
        Ok(path) => {
            tracing::trace!("Found {}", path.display());
            Some(path)
        }
        Err(e) => {
            tracing::warn!("Unreadable entry while searching {pattern}: {e}");
            None
        }
    });
    uniq(matches)
}
