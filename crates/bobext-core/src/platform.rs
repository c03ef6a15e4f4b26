//! Per-OS search policy: default prefixes, include/library directories and
//! library file naming conventions.

use std::fmt;
use std::path::PathBuf;

/// Operating-system family whose conventions drive the default search roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

/// Which flavour of library file to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryKind {
    /// Static archives (`libfoo.a`, `foo.lib`).
    Static,
    /// Shared objects (`libfoo.so`, `libfoo.dylib`, `foo.dll`).
    Shared,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "linux"),
            Self::MacOs => write!(f, "macos"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl Platform {
    /// The platform this crate was compiled for. Unix flavours other than
    /// macOS follow the Linux layout.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(windows) {
            Self::Windows
        } else {
            Self::Linux
        }
    }

    /// Installation prefixes searched by default, in precedence order.
    pub fn default_prefixes(self) -> Vec<PathBuf> {
        let prefixes: &[&str] = match self {
            Self::Linux => &["/usr", "/usr/local", "/opt/local"],
            Self::MacOs => &["/opt/homebrew", "/usr/local", "/opt/local", "/usr"],
            Self::Windows => &["C:\\msys64\\mingw64", "C:\\msys64\\usr"],
        };
        prefixes.iter().map(PathBuf::from).collect()
    }

    /// Directory names holding libraries under a prefix.
    pub fn lib_dir_names(self) -> &'static [&'static str] {
        match self {
            Self::Linux => &["lib", "lib64"],
            Self::MacOs | Self::Windows => &["lib"],
        }
    }

    /// Standard header directories: `<prefix>/include` for every default prefix.
    pub fn default_include_roots(self) -> Vec<PathBuf> {
        self.default_prefixes()
            .into_iter()
            .map(|prefix| prefix.join("include"))
            .collect()
    }

    /// Standard library directories.
    ///
    /// On Linux the Debian multiarch directory (`/usr/lib/<triplet>`) is
    /// included as a glob root right after `/usr/lib64`.
    pub fn default_lib_roots(self) -> Vec<PathBuf> {
        let mut roots = Vec::new();
        for prefix in self.default_prefixes() {
            for dir in self.lib_dir_names() {
                roots.push(prefix.join(dir));
            }
            if self == Self::Linux && prefix == PathBuf::from("/usr") {
                roots.push(prefix.join("lib").join("*-linux-gnu*"));
            }
        }
        roots
    }

    /// File-name patterns for library `name`, in search order.
    ///
    /// With a version only versioned names are produced; there is no
    /// fallback to unversioned files. Static names always precede shared
    /// ones. `kind` restricts the result to one flavour.
    pub fn library_name_patterns(
        self,
        name: &str,
        version: Option<&str>,
        kind: Option<LibraryKind>,
    ) -> Vec<String> {
        let mut patterns = Vec::new();
        if kind != Some(LibraryKind::Shared) {
            patterns.extend(self.static_names(name, version));
        }
        if kind != Some(LibraryKind::Static) {
            patterns.extend(self.shared_names(name, version));
        }
        patterns
    }

    fn static_names(self, name: &str, version: Option<&str>) -> Vec<String> {
        match (self, version) {
            (Self::Windows, Some(v)) => vec![format!("{name}-{v}.lib"), format!("lib{name}-{v}.a")],
            (Self::Windows, None) => vec![format!("{name}.lib"), format!("lib{name}.a")],
            (_, Some(v)) => vec![format!("lib{name}-{v}.a")],
            (_, None) => vec![format!("lib{name}.a")],
        }
    }

    fn shared_names(self, name: &str, version: Option<&str>) -> Vec<String> {
        match (self, version) {
            (Self::Linux, Some(v)) => vec![format!("lib{name}.so.{v}"), format!("lib{name}-{v}.so")],
            (Self::Linux, None) => vec![format!("lib{name}.so")],
            (Self::MacOs, Some(v)) => {
                vec![format!("lib{name}.{v}.dylib"), format!("lib{name}-{v}.dylib")]
            }
            (Self::MacOs, None) => vec![format!("lib{name}.dylib")],
            (Self::Windows, Some(v)) => vec![format!("{name}-{v}.dll"), format!("lib{name}-{v}.dll")],
            (Self::Windows, None) => vec![format!("{name}.dll"), format!("lib{name}.dll")],
        }
    }
}
