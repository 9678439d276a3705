//! Error types for fuelwire core.

use thiserror::Error;

/// Errors that can occur while decoding an output record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The discriminant does not name one of the known output variants.
    #[error("unknown output variant: {0}")]
    UnknownVariant(u64),

    /// The buffer ends before the record layout does.
    #[error("truncated input at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

impl DecodeError {
    /// The raw discriminant, if this is an unknown-variant error.
    pub fn discriminant(&self) -> Option<u64> {
        match self {
            DecodeError::UnknownVariant(d) => Some(*d),
            DecodeError::TruncatedInput { .. } => None,
        }
    }

    /// The offset decoding was attempted at, if this is a truncation.
    pub fn offset(&self) -> Option<usize> {
        match self {
            DecodeError::TruncatedInput { offset, .. } => Some(*offset),
            DecodeError::UnknownVariant(_) => None,
        }
    }
}

/// Result type for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
