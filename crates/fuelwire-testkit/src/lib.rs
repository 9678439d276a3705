//! # fuelwire testkit
//!
//! Testing utilities for fuelwire.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Reference encodings for cross-implementation verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Transaction-shaped buffers, ABI entries and a test logger
//!
//! ## Golden Vectors
//!
//! ```rust
//! use fuelwire_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, hex) in verify_all_vectors() {
//!     assert!(matches, "{}: {}", name, hex);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use fuelwire_testkit::generators::OutputParams;
//! use fuelwire_core::{decode_output, encode_output};
//!
//! proptest! {
//!     #[test]
//!     fn roundtrip(params: OutputParams) {
//!         let bytes = encode_output(&params.output);
//!         prop_assert_eq!(decode_output(&bytes, 0).unwrap().0, params.output);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use fuelwire_testkit::fixtures::TxFixture;
//!
//! let fixture = TxFixture::mixed();
//! assert_eq!(fixture.outputs.len(), 6);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{init_tracing, one_of_each, struct_fragment, TxFixture};
pub use generators::OutputParams;
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector, REFERENCE_B256};
