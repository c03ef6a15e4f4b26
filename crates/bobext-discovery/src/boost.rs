//! Boost detection: locate `boost/version.hpp`, decode `BOOST_VERSION` and
//! find versioned component libraries.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use semver::Version;

use crate::grep::egrep;
use crate::library::find_library;
use crate::search::{default_include_roots, find_header_in};

/// Matches the `#define BOOST_VERSION 107400` line of `boost/version.hpp`.
pub const BOOST_VERSION_PATTERN: &str = r"^#\s*define\s+BOOST_VERSION\s+(\d+)\s*$";

/// Subpaths of an include root that may hold `version.hpp`.
const BOOST_HEADER_SUBPATHS: &[&str] = &["boost", "boost?*"];

/// A Boost release version, e.g. `1.74.0`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoostVersion(Version);

impl BoostVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(Version::new(major, minor, patch))
    }

    /// Decode the integer form used by `BOOST_VERSION`
    /// (`major * 100000 + minor * 100 + patch`).
    pub fn from_encoded(encoded: u64) -> Self {
        Self::new(encoded / 100_000, (encoded / 100) % 1000, encoded % 100)
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }
}

impl fmt::Display for BoostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BoostVersion {
    type Err = semver::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s).map(Self)
    }
}

/// A Boost installation found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoostInstall {
    /// Path to `version.hpp`.
    pub header: PathBuf,
    pub version: BoostVersion,
}

impl BoostInstall {
    /// The directory to add to the include path (the parent of `boost/`).
    pub fn include_dir(&self) -> Option<&Path> {
        self.header.parent()?.parent()
    }

    /// Find the libraries of a Boost component (`system`, `filesystem`...)
    /// matching this installation's version: plain names first, then the
    /// multi-threaded `-mt` variants.
    pub fn find_libraries<P: AsRef<Path>>(&self, component: &str, roots: &[P]) -> Vec<PathBuf> {
        let version = self.version.to_string();
        let version = Some(version.as_str());
        let mut found = find_library(&format!("boost_{component}"), version, roots);
        found.extend(find_library(&format!("boost_{component}-mt"), version, roots));
        found
    }
}

/// Look for Boost headers under `include_roots`.
///
/// Returns the first `version.hpp` that defines `BOOST_VERSION` exactly once.
pub fn discover_boost<P: AsRef<Path>>(include_roots: &[P]) -> Option<BoostInstall> {
    for header in find_header_in("version.hpp", include_roots, BOOST_HEADER_SUBPATHS) {
        let matches = match egrep(&header, BOOST_VERSION_PATTERN) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!("Cannot read {}: {e}", header.display());
                continue;
            }
        };
        let [define] = matches.as_slice() else {
            tracing::debug!(
                "{} defines BOOST_VERSION {} time(s), skipping",
                header.display(),
                matches.len()
            );
            continue;
        };
        let Some(encoded) = define.parse_group::<u64>(1) else {
            continue;
        };
        let version = BoostVersion::from_encoded(encoded);
        tracing::debug!("Found Boost {version} at {}", header.display());
        return Some(BoostInstall { header, version });
    }
    None
}

/// [`discover_boost`] over the default include roots.
pub fn discover_boost_default() -> Option<BoostInstall> {
    discover_boost(&default_include_roots())
}
