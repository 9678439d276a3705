//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Once;

use fuelwire_abi::{JsonFragment, JsonParam};
use fuelwire_core::{Bytes32, Output, OutputCoder};

/// A buffer laid out like the tail of a transaction: a leading field, the
/// output records, then a trailing field.
#[derive(Debug, Clone)]
pub struct TxFixture {
    /// The full buffer.
    pub bytes: Vec<u8>,
    /// Offset of the first output.
    pub outputs_offset: usize,
    /// Offset just past the last output.
    pub outputs_end: usize,
    /// The outputs in the buffer, in order.
    pub outputs: Vec<Output>,
}

impl TxFixture {
    /// Lay out `outputs` between a `prefix` and a `suffix`.
    pub fn new(prefix: &[u8], outputs: Vec<Output>, suffix: &[u8]) -> Self {
        let coder = OutputCoder::default();
        let mut bytes = prefix.to_vec();
        let outputs_offset = bytes.len();
        for output in &outputs {
            bytes.extend_from_slice(&coder.encode(output));
        }
        let outputs_end = bytes.len();
        bytes.extend_from_slice(suffix);

        Self {
            bytes,
            outputs_offset,
            outputs_end,
            outputs,
        }
    }

    /// One of each output variant between an 8-byte count word and a
    /// 32-byte trailing field.
    pub fn mixed() -> Self {
        let outputs = one_of_each();
        let count = (outputs.len() as u64).to_be_bytes();
        Self::new(&count, outputs, &[0x77; 32])
    }
}

/// Deterministic 32-byte value filled with `byte`.
pub fn hash(byte: u8) -> Bytes32 {
    Bytes32::from_bytes([byte; 32])
}

/// One output of every variant, with distinct non-zero field values.
pub fn one_of_each() -> Vec<Output> {
    vec![
        Output::coin(hash(0x01), 1_000, hash(0x02)),
        Output::contract(3, hash(0x03), hash(0x04)),
        Output::withdrawal(hash(0x05), 42, hash(0x06)),
        Output::change(hash(0x07), 0, hash(0x08)),
        Output::variable(hash(0x09), u64::MAX, hash(0x0a)),
        Output::contract_created(hash(0x0b), hash(0x0c)),
    ]
}

/// A function entry with a single struct input, as the compiler emits it.
pub fn struct_fragment(name: &str) -> JsonFragment {
    JsonFragment {
        ty: Some("function".into()),
        name: Some(name.into()),
        inputs: Some(vec![JsonParam::new("value", "struct TestStruct")
            .with_components(vec![JsonParam::new("a", "bool"), JsonParam::new("b", "u64")])]),
        outputs: None,
    }
}

static TRACING: Once = Once::new();

/// Install a test logger once per process. Honors `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .try_init();
    });
}
