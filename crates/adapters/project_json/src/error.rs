//! Errors raised while loading a project dump.

use std::path::PathBuf;

use knxha_domain::error::ValidationError;

/// A project that cannot be turned into a registry.
#[derive(Debug, thiserror::Error)]
pub enum ProjectLoadError {
    /// The project file could not be read.
    #[error("failed to read project file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid project dump.
    #[error("failed to parse project JSON")]
    Parse(#[from] serde_json::Error),

    /// An address identifier in the dump is malformed.
    #[error("invalid group address {address:?} in {context}")]
    InvalidAddress {
        address: String,
        /// Section of the dump the identifier was found in.
        context: &'static str,
        #[source]
        source: ValidationError,
    },

    /// A group address entry is filed under another address.
    #[error("group address entry {key:?} describes address {address:?}")]
    InconsistentReference { key: String, address: String },

    /// The assembled registry violates a domain invariant.
    #[error("invalid project")]
    Validation(#[from] ValidationError),
}
