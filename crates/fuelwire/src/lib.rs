//! # fuelwire
//!
//! Byte-exact coding for Fuel transaction outputs and canonical function
//! selector signatures for contract calls.
//!
//! ## Overview
//!
//! - **Outputs**: six fixed-width record shapes behind an 8-byte discriminant,
//!   decoded with offset threading so they compose with other fields
//! - **Selectors**: `name(type,type)` signatures using the Ethereum formatter,
//!   with struct parameters prefixed by `s`
//!
//! ## Usage
//!
//! ```rust
//! use fuelwire::{Bytes32, CoderConfig, Output, WireCoder};
//!
//! let coder = WireCoder::new(CoderConfig::default());
//!
//! let outputs = vec![
//!     Output::coin(Bytes32::ZERO, 10, Bytes32::ZERO),
//!     Output::contract_created(Bytes32::ZERO, Bytes32::ZERO),
//! ];
//! let bytes = coder.encode_outputs(&outputs).unwrap();
//!
//! let (decoded, end) = coder.decode_outputs(&bytes, 0, 2).unwrap();
//! assert_eq!(decoded, outputs);
//! assert_eq!(end, bytes.len());
//! ```
//!
//! ## Re-exports
//!
//! - `fuelwire::core` - Output model and canonical encoding
//! - `fuelwire::abi` - Parameter descriptors and selector formatting

pub mod coder;
pub mod error;

pub use fuelwire_abi as abi;
pub use fuelwire_core as core;

pub use coder::{CoderConfig, WireCoder, MAX_OUTPUTS};
pub use error::{Result, WireError};

pub use fuelwire_abi::{
    format_selector, AbiError, FormatMode, FormatParam, FunctionFragment, JsonFragment,
    JsonParam, ParamType,
};
pub use fuelwire_core::{
    decode_output, encode_output, Bytes32, DecodeError, Output, OutputCoder, OutputType,
};

/// Encode outputs back to back with the default configuration.
pub fn encode_outputs(outputs: &[Output]) -> Result<bytes::Bytes> {
    WireCoder::default().encode_outputs(outputs)
}

/// Decode `count` outputs at `offset` with the default configuration.
pub fn decode_outputs(data: &[u8], offset: usize, count: usize) -> Result<(Vec<Output>, usize)> {
    WireCoder::default().decode_outputs(data, offset, count)
}
