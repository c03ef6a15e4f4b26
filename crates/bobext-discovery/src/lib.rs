//! Header, library and version discovery for C++ extension build scripts.
//!
//! Every function is a synchronous, single-pass search over the filesystem.
//! "Not found" is always an empty list (or `None`), never an error; only
//! unreadable files and malformed regular expressions are reported as
//! [`BobExtError`](bobext_util::errors::BobExtError).

pub mod boost;
pub mod grep;
pub mod library;
pub mod search;

pub use boost::{discover_boost, discover_boost_default, BoostInstall, BoostVersion};
pub use grep::{egrep, GrepMatch};
pub use library::{find_library, find_library_default, LibrarySearch};
pub use search::{find_file, find_file_default, find_header, find_header_in};

pub use bobext_core::platform::{LibraryKind, Platform};
pub use bobext_util::uniq;
