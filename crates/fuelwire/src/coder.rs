//! The wire coder: output lists and selectors behind one configured handle.
//!
//! A transaction carries its outputs back to back with no envelope. The
//! caller knows the count from an earlier field, so decoding threads the
//! offset through each record in turn.

use bytes::{Bytes, BytesMut};

use fuelwire_abi::FunctionFragment;
use fuelwire_core::{Output, OutputCoder};

use crate::error::{Result, WireError};

/// Largest output count a transaction's 8-bit counter can express.
pub const MAX_OUTPUTS: usize = u8::MAX as usize;

/// Configuration for the wire coder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoderConfig {
    /// Upper bound on outputs encoded or decoded in one call.
    pub max_outputs: usize,
    /// Reject bytes left in the buffer after the last decoded output.
    pub strict_trailing: bool,
}

impl Default for CoderConfig {
    fn default() -> Self {
        Self {
            max_outputs: MAX_OUTPUTS,
            strict_trailing: false,
        }
    }
}

/// Encodes and decodes transaction output lists and formats selectors.
///
/// Stateless apart from its configuration; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct WireCoder {
    config: CoderConfig,
    output: OutputCoder,
}

impl WireCoder {
    /// Create a coder with the given configuration.
    pub fn new(config: CoderConfig) -> Self {
        Self {
            config,
            output: OutputCoder::default(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CoderConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Outputs
    // ─────────────────────────────────────────────────────────────────────────

    /// Encode a single output.
    pub fn encode_output(&self, output: &Output) -> Bytes {
        self.output.encode(output)
    }

    /// Decode a single output at `offset`, returning the offset after it.
    pub fn decode_output(&self, data: &[u8], offset: usize) -> Result<(Output, usize)> {
        Ok(self.output.decode(data, offset)?)
    }

    /// Encode outputs back to back.
    pub fn encode_outputs(&self, outputs: &[Output]) -> Result<Bytes> {
        self.check_count(outputs.len())?;

        let len = outputs.iter().map(Output::encoded_len).sum();
        let mut buf = BytesMut::with_capacity(len);
        for output in outputs {
            self.output.encode_into(output, &mut buf);
        }

        tracing::debug!(count = outputs.len(), bytes = len, "encoded outputs");
        Ok(buf.freeze())
    }

    /// Decode `count` consecutive outputs starting at `offset`.
    ///
    /// Returns the outputs and the offset just past the last one. Fails on
    /// the first record that does not decode; nothing partial is returned.
    pub fn decode_outputs(
        &self,
        data: &[u8],
        offset: usize,
        count: usize,
    ) -> Result<(Vec<Output>, usize)> {
        self.check_count(count)?;

        let mut outputs = Vec::with_capacity(count);
        let mut cursor = offset;
        for _ in 0..count {
            let (output, next) = self.output.decode(data, cursor)?;
            outputs.push(output);
            cursor = next;
        }

        if self.config.strict_trailing && cursor < data.len() {
            let remaining = data.len() - cursor;
            tracing::warn!(offset = cursor, remaining, "trailing bytes after outputs");
            return Err(WireError::TrailingBytes {
                offset: cursor,
                remaining,
            });
        }

        tracing::debug!(count, start = offset, end = cursor, "decoded outputs");
        Ok((outputs, cursor))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selectors
    // ─────────────────────────────────────────────────────────────────────────

    /// The selector signature of a function fragment.
    pub fn selector(&self, fragment: &FunctionFragment) -> Result<String> {
        Ok(fragment.format()?)
    }

    fn check_count(&self, count: usize) -> Result<()> {
        if count > self.config.max_outputs {
            tracing::warn!(count, max = self.config.max_outputs, "output count over limit");
            return Err(WireError::TooManyOutputs {
                count,
                max: self.config.max_outputs,
            });
        }
        Ok(())
    }
}
