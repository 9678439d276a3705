//! Golden test vectors for byte-exact output encoding.
//!
//! Every implementation of the output coder must produce these bytes. The
//! encodings were captured from the TypeScript SDK and pin the layout,
//! including the zero-filled discriminant and amount words.

use serde::{Deserialize, Serialize};

use fuelwire_core::{encode_output, Bytes32, Output};

/// The 32-byte value used by every reference vector.
pub const REFERENCE_B256: &str =
    "0xd5579c46dfcc7f18207013e65b44e4cb4e2c2298f4ac457ba8f82743f31e930b";

/// A golden test vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: String,
    /// The output being encoded.
    pub output: Output,
    /// Expected encoding, `0x`-prefixed hex.
    pub encoded: String,
}

impl GoldenVector {
    /// Expected encoding as raw bytes.
    pub fn expected_bytes(&self) -> Vec<u8> {
        hex::decode(self.encoded.trim_start_matches("0x"))
            .unwrap_or_else(|e| panic!("vector '{}' has invalid hex: {}", self.name, e))
    }
}

fn reference_b256() -> Bytes32 {
    Bytes32::from_hex(REFERENCE_B256).expect("reference hash is valid hex")
}

fn vector(name: &str, output: Output, encoded: &str) -> GoldenVector {
    GoldenVector {
        name: name.to_string(),
        output,
        encoded: encoded.to_string(),
    }
}

/// Get all golden test vectors, one per output variant.
pub fn all_vectors() -> Vec<GoldenVector> {
    let b = reference_b256();
    vec![
        vector(
            "coin",
            Output::coin(b, 0, b),
            "0x0000000000000000d5579c46dfcc7f18207013e65b44e4cb4e2c2298f4ac457ba8f82743f31e930b0000000000000000d5579c46dfcc7f18207013e65b44e4cb4e2c2298f4ac457ba8f82743f31e930b",
        ),
        vector(
            "contract",
            Output::contract(0, b, b),
            "0x00000000000000010000000000000000d5579c46dfcc7f18207013e65b44e4cb4e2c2298f4ac457ba8f82743f31e930bd5579c46dfcc7f18207013e65b44e4cb4e2c2298f4ac457ba8f82743f31e930b",
        ),
        vector(
            "withdrawal",
            Output::withdrawal(b, 0, b),
            "0x0000000000000002d5579c46dfcc7f18207013e65b44e4cb4e2c2298f4ac457ba8f82743f31e930b0000000000000000d5579c46dfcc7f18207013e65b44e4cb4e2c2298f4ac457ba8f82743f31e930b",
        ),
        vector(
            "change",
            Output::change(b, 0, b),
            "0x0000000000000003d5579c46dfcc7f18207013e65b44e4cb4e2c2298f4ac457ba8f82743f31e930b0000000000000000d5579c46dfcc7f18207013e65b44e4cb4e2c2298f4ac457ba8f82743f31e930b",
        ),
        vector(
            "variable",
            Output::variable(b, 0, b),
            "0x0000000000000004d5579c46dfcc7f18207013e65b44e4cb4e2c2298f4ac457ba8f82743f31e930b0000000000000000d5579c46dfcc7f18207013e65b44e4cb4e2c2298f4ac457ba8f82743f31e930b",
        ),
        vector(
            "contract_created",
            Output::contract_created(b, b),
            "0x0000000000000005d5579c46dfcc7f18207013e65b44e4cb4e2c2298f4ac457ba8f82743f31e930bd5579c46dfcc7f18207013e65b44e4cb4e2c2298f4ac457ba8f82743f31e930b",
        ),
    ]
}

/// Verify all golden vectors against the encoder.
///
/// Returns `(name, matches, actual_hex)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let actual = format!("0x{}", hex::encode(encode_output(&v.output)));
            (v.name.clone(), actual == v.encoded, actual)
        })
        .collect()
}

/// Export the vectors as pretty JSON for other implementations.
pub fn vectors_json() -> String {
    serde_json::to_string_pretty(&all_vectors()).expect("vectors serialize to JSON")
}
