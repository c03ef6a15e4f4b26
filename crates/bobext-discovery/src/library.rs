//! Library discovery using per-platform file naming conventions.

use std::path::{Path, PathBuf};

use bobext_core::config::SearchConfig;
use bobext_core::platform::{LibraryKind, Platform};
use bobext_util::uniq;

use crate::search::find_file;

/// Builder for a library search.
///
/// Candidate file names come from [`Platform::library_name_patterns`]:
/// static names before shared ones, and with a version only the versioned
/// names. Each name is searched across all roots before the next name is
/// tried, so the first entry is the preferred link candidate.
#[derive(Debug, Clone)]
pub struct LibrarySearch {
    name: String,
    version: Option<String>,
    roots: Option<Vec<PathBuf>>,
    subpaths: Vec<String>,
    kind: Option<LibraryKind>,
    platform: Platform,
}

impl LibrarySearch {
    /// Search for library `name`, given without `lib` prefix or extension.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            roots: None,
            subpaths: Vec::new(),
            kind: None,
            platform: Platform::current(),
        }
    }

    /// Only look for files carrying this exact version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Search these roots instead of the default library roots.
    pub fn roots(mut self, roots: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.roots = Some(roots.into_iter().map(Into::into).collect());
        self
    }

    /// Subpaths (glob patterns allowed) appended to every root.
    pub fn subpaths(mut self, subpaths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.subpaths = subpaths.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict the search to static or shared libraries.
    pub fn kind(mut self, kind: LibraryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Use another platform's naming conventions and default roots.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Run the search. Returns an empty list when nothing is found.
    pub fn find(&self) -> Vec<PathBuf> {
        let roots = match &self.roots {
            Some(roots) => roots.clone(),
            None => SearchConfig::resolve().library_roots(self.platform),
        };
        let subpaths: Vec<&str> = self.subpaths.iter().map(String::as_str).collect();
        let patterns =
            self.platform
                .library_name_patterns(&self.name, self.version.as_deref(), self.kind);

        let mut found = Vec::new();
        for pattern in &patterns {
            tracing::debug!("Looking for library file {pattern}");
            found.extend(find_file(pattern, &roots, &subpaths));
        }
        uniq(found)
    }
}

/// Find library `name` (optionally at an exact `version`) under `roots`.
///
/// There is no fallback from a versioned to an unversioned search: call
/// again without a version if that is acceptable.
pub fn find_library<P: AsRef<Path>>(name: &str, version: Option<&str>, roots: &[P]) -> Vec<PathBuf> {
    let mut search =
        LibrarySearch::new(name).roots(roots.iter().map(|root| root.as_ref().to_path_buf()));
    if let Some(version) = version {
        search = search.version(version);
    }
    search.find()
}

/// [`find_library`] over the default library roots.
pub fn find_library_default(name: &str, version: Option<&str>) -> Vec<PathBuf> {
    let mut search = LibrarySearch::new(name);
    if let Some(version) = version {
        search = search.version(version);
    }
    search.find()
}
