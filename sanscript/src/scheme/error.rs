//! Error types for scheme construction and rewriting.

use smol_str::SmolStr;

/// Errors raised while building schemes or applying rewrites to them.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SchemeError {
    /// A symbol group needed by an operation is absent from the scheme
    #[error("scheme `{scheme}` has no `{group}` group")]
    MissingGroup {
        /// name of the scheme
        scheme: SmolStr,
        /// name of the absent group
        group: SmolStr,
    },

    /// A scheme name was not found in the registry
    #[error("unknown scheme `{0}`")]
    UnknownScheme(SmolStr),

    /// The same canonical symbol appears in two inventory groups
    #[error("scheme `{scheme}` defines `{symbol}` in both `{first}` and `{second}`")]
    DuplicateSymbol {
        /// name of the scheme
        scheme: SmolStr,
        /// the repeated symbol
        symbol: SmolStr,
        /// group of the first occurrence
        first: &'static str,
        /// group of the second occurrence
        second: &'static str,
    },

    /// A group exists but does not have the expected shape
    #[error("scheme `{scheme}` has a malformed `{group}` group: {source}")]
    InvalidGroup {
        /// name of the scheme
        scheme: SmolStr,
        /// name of the malformed group
        group: String,
        /// underlying decode failure
        source: serde_json::Error,
    },

    /// A table expected to be a scheme has no `vowels` group
    #[error("`{0}` does not describe a scheme")]
    NotAScheme(String),

    /// The operation is only defined for other kinds of scheme
    #[error("`{operation}` is not supported by scheme `{scheme}`")]
    Unsupported {
        /// name of the scheme
        scheme: SmolStr,
        /// the rejected operation
        operation: &'static str,
    },

    /// A rewrite pattern derived from scheme data did not compile
    #[error("invalid rewrite pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Reading a scheme table failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A scheme table is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemeError {
    pub(crate) fn missing(scheme: &str, group: &str) -> SchemeError {
        SchemeError::MissingGroup {
            scheme: scheme.into(),
            group: group.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SchemeError>;
