//! Error types for the ABI module.

use thiserror::Error;

/// Errors raised while building or formatting ABI descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// A parameter descriptor is missing required shape information.
    #[error("malformed type {ty:?}: {reason}")]
    MalformedType { ty: String, reason: String },

    /// A fragment that should describe a function has no name.
    #[error("function fragment has no name")]
    MissingName,

    /// The fragment is not a function (event, constructor, ...).
    #[error("expected a function fragment, got {0:?}")]
    UnexpectedFragment(String),

    /// A format mode name that the base formatter does not know.
    #[error("unknown format mode: {0:?}")]
    UnknownFormat(String),

    /// JSON could not be parsed or produced.
    #[error("json error: {0}")]
    Json(String),
}

impl AbiError {
    pub(crate) fn malformed(ty: &str, reason: impl Into<String>) -> Self {
        AbiError::MalformedType {
            ty: ty.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for AbiError {
    fn from(e: serde_json::Error) -> Self {
        AbiError::Json(e.to_string())
    }
}

/// Result type for ABI operations.
pub type Result<T> = std::result::Result<T, AbiError>;
