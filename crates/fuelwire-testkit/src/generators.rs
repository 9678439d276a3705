//! Proptest generators for property-based testing.

use proptest::prelude::*;

use fuelwire_abi::ParamType;
use fuelwire_core::{Bytes32, Output, OutputType};

/// Generate a random 32-byte value.
pub fn bytes32() -> impl Strategy<Value = Bytes32> {
    any::<[u8; 32]>().prop_map(Bytes32::from_bytes)
}

/// Generate a 32-byte value biased towards the edges (all zero, all ones).
pub fn edge_bytes32() -> impl Strategy<Value = Bytes32> {
    prop_oneof![
        1 => Just(Bytes32::ZERO),
        1 => Just(Bytes32::from_bytes([0xff; 32])),
        8 => bytes32(),
    ]
}

/// Generate an amount, including the zero and max edges.
pub fn amount() -> impl Strategy<Value = u64> {
    prop_oneof![
        1 => Just(0u64),
        1 => Just(u64::MAX),
        8 => any::<u64>(),
    ]
}

/// Generate an OutputType.
pub fn output_type() -> impl Strategy<Value = OutputType> {
    prop::sample::select(OutputType::ALL.to_vec())
}

/// Generate an output of any variant.
pub fn output() -> impl Strategy<Value = Output> {
    prop_oneof![
        (edge_bytes32(), amount(), edge_bytes32()).prop_map(|(to, a, id)| Output::coin(to, a, id)),
        (amount(), edge_bytes32(), edge_bytes32())
            .prop_map(|(i, b, s)| Output::contract(i, b, s)),
        (edge_bytes32(), amount(), edge_bytes32())
            .prop_map(|(to, a, id)| Output::withdrawal(to, a, id)),
        (edge_bytes32(), amount(), edge_bytes32())
            .prop_map(|(to, a, id)| Output::change(to, a, id)),
        (edge_bytes32(), amount(), edge_bytes32())
            .prop_map(|(to, a, id)| Output::variable(to, a, id)),
        (edge_bytes32(), edge_bytes32()).prop_map(|(c, s)| Output::contract_created(c, s)),
    ]
}

/// Generate a list of outputs.
pub fn outputs(max_len: usize) -> impl Strategy<Value = Vec<Output>> {
    prop::collection::vec(output(), 0..=max_len)
}

/// Generate a discriminant outside the known variants.
pub fn unknown_discriminant() -> impl Strategy<Value = u64> {
    6u64..=u64::MAX
}

/// Generate a primitive ABI type.
pub fn primitive_param() -> impl Strategy<Value = ParamType> {
    prop::sample::select(vec!["u8", "u16", "u32", "u64", "bool", "b256", "byte"])
        .prop_map(ParamType::primitive)
}

/// Generate a parameter type: primitives, arrays, tuples and structs,
/// nested up to a few levels.
pub fn param_type() -> impl Strategy<Value = ParamType> {
    primitive_param().prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            (inner.clone(), prop::option::of(1usize..8))
                .prop_map(|(child, len)| ParamType::array(child, len)),
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|members| ParamType::tuple("tuple", members)),
            ("[A-Z][a-zA-Z]{0,8}", prop::collection::vec(inner, 0..4)).prop_map(
                |(name, members)| ParamType::tuple(format!("struct {}", name), members)
            ),
        ]
    })
}

/// Parameters for an arbitrary output, for `proptest!` argument position.
#[derive(Debug, Clone)]
pub struct OutputParams {
    pub output: Output,
}

impl Arbitrary for OutputParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        output().prop_map(|output| OutputParams { output }).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuelwire_abi::{format_selector, FormatParam};
    use fuelwire_core::{decode_output, encode_output, DecodeError};

    proptest! {
        #[test]
        fn test_roundtrip(params: OutputParams) {
            let encoded = encode_output(&params.output);
            let (decoded, offset) = decode_output(&encoded, 0).unwrap();

            prop_assert_eq!(decoded, params.output);
            prop_assert_eq!(offset, encoded.len());
        }

        #[test]
        fn test_truncated_record_reports_its_width(ty in output_type()) {
            let data = ty.to_u64().to_be_bytes();
            let err = decode_output(&data, 0).unwrap_err();
            prop_assert_eq!(
                err,
                DecodeError::TruncatedInput { offset: 0, needed: ty.encoded_len(), available: 8 }
            );
        }

        #[test]
        fn test_encoding_deterministic(params: OutputParams) {
            prop_assert_eq!(encode_output(&params.output), encode_output(&params.output));
        }

        #[test]
        fn test_discriminant_prefix(params: OutputParams) {
            let encoded = encode_output(&params.output);
            let ty = params.output.output_type();

            prop_assert_eq!(&encoded[..8], &ty.to_u64().to_be_bytes()[..]);
            prop_assert_eq!(encoded.len(), ty.encoded_len());
        }

        #[test]
        fn test_unknown_discriminant_rejected(d in unknown_discriminant(), tail in prop::collection::vec(any::<u8>(), 0..100)) {
            let mut data = d.to_be_bytes().to_vec();
            data.extend(tail);
            prop_assert_eq!(decode_output(&data, 0), Err(DecodeError::UnknownVariant(d)));
        }

        #[test]
        fn test_every_strict_prefix_truncates(params in any::<OutputParams>(), cut in 0usize..80) {
            let encoded = encode_output(&params.output);
            prop_assume!(cut < encoded.len());

            let result = decode_output(&encoded[..cut], 0);
            let is_truncated = matches!(result, Err(DecodeError::TruncatedInput { .. }));
            prop_assert!(is_truncated);
        }

        #[test]
        fn test_selector_only_prefixes_top_level_structs(param in param_type()) {
            let base = param.format(None).unwrap();
            let signature = format_selector("f", std::slice::from_ref(&param)).unwrap();

            let expected = if param.kind().starts_with("struct ") {
                format!("f(s{})", base)
            } else {
                format!("f({})", base)
            };
            prop_assert_eq!(signature, expected);
        }

        #[test]
        fn test_json_descriptor_roundtrip(param in param_type()) {
            let back = ParamType::from_json(&param.to_json()).unwrap();
            prop_assert_eq!(back.format(None).unwrap(), param.format(None).unwrap());
        }
    }
}
