//! Fixed-width canonical encoding for transaction outputs.
//!
//! Layout of one record (big-endian, no alignment padding):
//!
//! ```text
//! [0..8)   discriminant (u64)
//! [8..N)   variant fields, in declaration order
//! ```
//!
//! - Integers: always 8 bytes, big-endian, zero-padded on the left
//! - Hashes: always 32 raw bytes, no length prefix
//! - No envelope: the record length is implied by the discriminant
//!
//! **CRITICAL**: This layout is consensus-critical. Field widths and order are
//! fixed by the network and must not change.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{DecodeError, Result};
use crate::output::{Output, OutputType, WORD_SIZE};
use crate::types::{Bytes32, BYTES32_LEN};

/// Encoder/decoder for a single output field of a transaction.
///
/// Decoding threads an offset through the buffer so the caller can continue
/// parsing whatever field follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputCoder {
    name: &'static str,
}

impl Default for OutputCoder {
    fn default() -> Self {
        Self::new("output")
    }
}

impl OutputCoder {
    /// Create a coder for the named transaction field.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// The field name this coder reports in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Encode an output into a freshly allocated buffer of exactly
    /// `output.encoded_len()` bytes.
    pub fn encode(&self, output: &Output) -> Bytes {
        let mut buf = BytesMut::with_capacity(output.encoded_len());
        self.encode_into(output, &mut buf);
        buf.freeze()
    }

    /// Append the encoding of an output to a caller-owned buffer.
    pub fn encode_into(&self, output: &Output, buf: &mut BytesMut) {
        buf.reserve(output.encoded_len());
        buf.put_u64(output.output_type().to_u64());

        match output {
            Output::Coin {
                to,
                amount,
                asset_id,
            }
            | Output::Withdrawal {
                to,
                amount,
                asset_id,
            }
            | Output::Change {
                to,
                amount,
                asset_id,
            }
            | Output::Variable {
                to,
                amount,
                asset_id,
            } => {
                put_bytes32(buf, to);
                buf.put_u64(*amount);
                put_bytes32(buf, asset_id);
            }
            Output::Contract {
                input_index,
                balance_root,
                state_root,
            } => {
                buf.put_u64(*input_index);
                put_bytes32(buf, balance_root);
                put_bytes32(buf, state_root);
            }
            Output::ContractCreated {
                contract_id,
                state_root,
            } => {
                put_bytes32(buf, contract_id);
                put_bytes32(buf, state_root);
            }
        }
    }

    /// Decode one output starting at `offset`.
    ///
    /// Returns the output and the offset just past it. Nothing is returned for
    /// a partial record: either the whole layout is present or the call fails.
    pub fn decode(&self, data: &[u8], offset: usize) -> Result<(Output, usize)> {
        let available = data.len().saturating_sub(offset);
        if available < WORD_SIZE {
            tracing::warn!(field = self.name, offset, available, "truncated output discriminant");
            return Err(DecodeError::TruncatedInput {
                offset,
                needed: WORD_SIZE,
                available,
            });
        }

        let mut header = &data[offset..offset + WORD_SIZE];
        let discriminant = header.get_u64();
        let output_type = OutputType::try_from(discriminant).map_err(|e| {
            tracing::warn!(field = self.name, offset, discriminant, "unknown output variant");
            e
        })?;

        let needed = output_type.encoded_len();
        if available < needed {
            tracing::warn!(
                field = self.name,
                offset,
                needed,
                available,
                "truncated output record"
            );
            return Err(DecodeError::TruncatedInput {
                offset,
                needed,
                available,
            });
        }

        let mut cursor = &data[offset + WORD_SIZE..offset + needed];
        let output = match output_type {
            OutputType::Coin
            | OutputType::Withdrawal
            | OutputType::Change
            | OutputType::Variable => {
                let to = get_bytes32(&mut cursor);
                let amount = cursor.get_u64();
                let asset_id = get_bytes32(&mut cursor);
                match output_type {
                    OutputType::Coin => Output::coin(to, amount, asset_id),
                    OutputType::Withdrawal => Output::withdrawal(to, amount, asset_id),
                    OutputType::Change => Output::change(to, amount, asset_id),
                    OutputType::Variable => Output::variable(to, amount, asset_id),
                    OutputType::Contract | OutputType::ContractCreated => {
                        unreachable!("outer match covers {:?}", output_type)
                    }
                }
            }
            OutputType::Contract => {
                let input_index = cursor.get_u64();
                let balance_root = get_bytes32(&mut cursor);
                let state_root = get_bytes32(&mut cursor);
                Output::contract(input_index, balance_root, state_root)
            }
            OutputType::ContractCreated => {
                let contract_id = get_bytes32(&mut cursor);
                let state_root = get_bytes32(&mut cursor);
                Output::contract_created(contract_id, state_root)
            }
        };
        debug_assert!(!cursor.has_remaining());

        tracing::trace!(field = self.name, offset, ?output_type, "decoded output");
        Ok((output, offset + needed))
    }
}

/// Encode an output with the default coder.
pub fn encode_output(output: &Output) -> Bytes {
    OutputCoder::default().encode(output)
}

/// Decode an output at `offset` with the default coder.
pub fn decode_output(data: &[u8], offset: usize) -> Result<(Output, usize)> {
    OutputCoder::default().decode(data, offset)
}

/// Write a hash field: 32 raw bytes.
fn put_bytes32(buf: &mut BytesMut, value: &Bytes32) {
    buf.put_slice(value.as_bytes());
}

/// Read a hash field. The caller has already checked the cursor length.
fn get_bytes32(cursor: &mut &[u8]) -> Bytes32 {
    let mut arr = [0u8; BYTES32_LEN];
    cursor.copy_to_slice(&mut arr);
    Bytes32(arr)
}
