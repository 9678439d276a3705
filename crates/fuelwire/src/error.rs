//! Error types for fuelwire.

use fuelwire_abi::AbiError;
use fuelwire_core::DecodeError;
use thiserror::Error;

/// Errors that can occur during fuelwire operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// A record could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// An ABI descriptor was rejected.
    #[error("abi error: {0}")]
    Abi(#[from] AbiError),

    /// More outputs were requested than the configuration allows.
    #[error("too many outputs: {count} exceeds limit of {max}")]
    TooManyOutputs { count: usize, max: usize },

    /// Bytes remained after the last record in strict mode.
    #[error("{remaining} trailing bytes after offset {offset}")]
    TrailingBytes { offset: usize, remaining: usize },
}

/// Result type for fuelwire operations.
pub type Result<T> = std::result::Result<T, WireError>;
