use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all bobext operations.
///
/// "Not found" is never an error here: finders report it as an empty list.
#[derive(Debug, Error, Diagnostic)]
pub enum BobExtError {
    /// I/O operation failed. The underlying error is kept untouched.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A regular expression could not be compiled.
    #[error("Invalid pattern: {0}")]
    #[diagnostic(help("Patterns use the `regex` crate syntax"))]
    Pattern(#[from] regex::Error),

    /// Invalid or unreadable search configuration (e.g. bobext.toml).
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check the [search] table of your bobext.toml"))]
    Config { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type BobExtResult<T> = miette::Result<T>;
