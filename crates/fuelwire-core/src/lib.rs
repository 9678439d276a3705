//! # fuelwire core
//!
//! Pure primitives for transaction outputs: the output model and its
//! fixed-width canonical encoding.
//!
//! This crate contains no I/O. Encoding and decoding are bounded in-memory
//! transformations over caller-owned buffers.
//!
//! ## Key Types
//!
//! - [`Output`] - One transaction output, a closed set of six record shapes
//! - [`OutputType`] - The 8-byte discriminant selecting a record layout
//! - [`OutputCoder`] - Encoder/decoder that threads offsets through a buffer
//! - [`Bytes32`] - Raw 32-byte hash field
//!
//! ## Encoding
//!
//! See the [`canonical`] module for the wire layout.

pub mod canonical;
pub mod error;
pub mod output;
pub mod types;

pub use canonical::{decode_output, encode_output, OutputCoder};
pub use error::DecodeError;
pub use output::{Output, OutputType, WORD_SIZE};
pub use types::{Bytes32, BYTES32_LEN};
