use std::ffi::OsString;
use std::path::{Path, PathBuf};

use bobext_util::errors::{BobExtError, BobExtResult};
use bobext_util::fs::split_search_path;
use bobext_util::uniq;
use serde::{Deserialize, Serialize};

use crate::platform::Platform;
use crate::CONFIG_FILE_NAME;

/// Extra installation prefixes, e.g. `/opt/blitz:/opt/boost`.
pub const PREFIX_PATH_VAR: &str = "BOBEXT_PREFIX_PATH";
/// Extra header directories searched before any prefix.
pub const INCLUDE_PATH_VAR: &str = "BOBEXT_INCLUDE_PATH";
/// Extra library directories searched before any prefix.
pub const LIBRARY_PATH_VAR: &str = "BOBEXT_LIBRARY_PATH";
/// Path to a `bobext.toml` file.
pub const CONFIG_PATH_VAR: &str = "BOBEXT_CONFIG";

/// User-supplied search roots, loaded from `bobext.toml` and/or environment
/// variables. User roots are always searched ahead of the platform defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub prefixes: Vec<PathBuf>,

    #[serde(default, rename = "include-dirs")]
    pub include_dirs: Vec<PathBuf>,

    #[serde(default, rename = "library-dirs")]
    pub library_dirs: Vec<PathBuf>,
}

/// On-disk layout of `bobext.toml`.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    search: SearchConfig,
}

impl SearchConfig {
    /// Load the `[search]` table from a TOML file, or return defaults if the
    /// file doesn't exist.
    pub fn load(path: &Path) -> BobExtResult<Self> {
        if !path.is_file() {
            tracing::debug!("No search config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| BobExtError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        let parsed: ConfigFile = toml::from_str(&content).map_err(|e| BobExtError::Config {
            message: format!("Failed to parse {}: {e}", path.display()),
        })?;
        Ok(parsed.search)
    }

    /// Read the `BOBEXT_*_PATH` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var_os(key))
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| split_search_path(&value))
                .unwrap_or_default()
        };
        Self {
            prefixes: read(PREFIX_PATH_VAR),
            include_dirs: read(INCLUDE_PATH_VAR),
            library_dirs: read(LIBRARY_PATH_VAR),
        }
    }

    /// The effective configuration for the current process: environment
    /// variables first, then the file named by `BOBEXT_CONFIG`, or
    /// `bobext.toml` in the working directory.
    ///
    /// A broken config file is reported and skipped.
    pub fn resolve() -> Self {
        let path = std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        let config = Self::from_env();
        match Self::load(&path) {
            Ok(file_config) => config.merge(file_config),
            Err(e) => {
                tracing::warn!("Ignoring search config {}: {e}", path.display());
                config
            }
        }
    }

    /// Append `other`'s entries after this config's own.
    pub fn merge(mut self, other: SearchConfig) -> Self {
        self.prefixes.extend(other.prefixes);
        self.include_dirs.extend(other.include_dirs);
        self.library_dirs.extend(other.library_dirs);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty() && self.include_dirs.is_empty() && self.library_dirs.is_empty()
    }

    /// Configured prefixes followed by the platform's, without duplicates.
    pub fn prefix_roots(&self, platform: Platform) -> Vec<PathBuf> {
        uniq(
            self.prefixes
                .iter()
                .cloned()
                .chain(platform.default_prefixes()),
        )
    }

    /// Header search roots: configured include dirs, `<prefix>/include` for
    /// configured prefixes, then the platform's include dirs.
    pub fn include_roots(&self, platform: Platform) -> Vec<PathBuf> {
        uniq(
            self.include_dirs
                .iter()
                .cloned()
                .chain(self.prefixes.iter().map(|p| p.join("include")))
                .chain(platform.default_include_roots()),
        )
    }

    /// Library search roots: configured library dirs, the platform's library
    /// directory names under configured prefixes, then the platform's
    /// library dirs.
    pub fn library_roots(&self, platform: Platform) -> Vec<PathBuf> {
        let from_prefixes = self.prefixes.iter().flat_map(|prefix| {
            platform
                .lib_dir_names()
                .iter()
                .map(move |dir| prefix.join(dir))
        });
        uniq(
            self.library_dirs
                .iter()
                .cloned()
                .chain(from_prefixes)
                .chain(platform.default_lib_roots()),
        )
    }
}
