//! Function selector signatures.
//!
//! Fuel reuses the Ethereum formatter for every parameter shape except
//! structs. Ethereum renders a struct exactly like a tuple, so a function
//! taking `struct P { a: bool, b: u64 }` would get the same signature as one
//! taking `(bool, u64)`. Fuel marks struct parameters with an `s` prefix:
//!
//! ```text
//! boo(s(bool,u64))    // struct parameter
//! boo((bool,u64))     // tuple parameter
//! ```
//!
//! The prefix is applied only to top-level inputs and only in the default
//! (sighash) mode; everything else goes straight to the base formatter.

use crate::error::Result;
use crate::param_type::{FormatMode, FormatParam, STRUCT_MARKER};

/// Prefix written in front of struct parameters in a selector signature.
pub const STRUCT_SELECTOR_PREFIX: char = 's';

/// Format one parameter, applying the struct prefix where it belongs.
pub fn format_param_override<P>(param: &P, mode: Option<FormatMode>) -> Result<String>
where
    P: FormatParam + ?Sized,
{
    let base = param.format(mode)?;

    let selector_mode = matches!(mode, None | Some(FormatMode::Sighash));
    if selector_mode && param.kind().starts_with(STRUCT_MARKER) {
        let mut prefixed = String::with_capacity(base.len() + 1);
        prefixed.push(STRUCT_SELECTOR_PREFIX);
        prefixed.push_str(&base);
        return Ok(prefixed);
    }

    Ok(base)
}

/// Build `name(input,input,...)` for a function.
///
/// Errors from the base formatter are returned unchanged.
pub fn format_selector<P: FormatParam>(name: &str, inputs: &[P]) -> Result<String> {
    let formatted = inputs
        .iter()
        .map(|input| format_param_override(input, None))
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("{}({})", name, formatted.join(",")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AbiError;
    use crate::param_type::ParamType;

    /// A base descriptor whose output is fixed, to pin the override in
    /// isolation from any real formatting rules.
    struct Fixed {
        kind: &'static str,
        text: &'static str,
    }

    impl FormatParam for Fixed {
        fn kind(&self) -> &str {
            self.kind
        }

        fn format(&self, mode: Option<FormatMode>) -> Result<String> {
            match mode {
                None | Some(FormatMode::Sighash) => Ok(self.text.to_string()),
                Some(other) => Ok(format!("{}:{}", other, self.text)),
            }
        }
    }

    struct Broken;

    impl FormatParam for Broken {
        fn kind(&self) -> &str {
            "struct Broken"
        }

        fn format(&self, _mode: Option<FormatMode>) -> Result<String> {
            Err(AbiError::MalformedType {
                ty: "struct Broken".into(),
                reason: "no components".into(),
            })
        }
    }

    #[test]
    fn test_struct_gets_prefix() {
        let param = Fixed {
            kind: "struct MyStruct",
            text: "(bool a,uint256 b)",
        };
        assert_eq!(
            format_selector("boo", &[param]).unwrap(),
            "boo(s(bool a,uint256 b))"
        );
    }

    #[test]
    fn test_plain_inputs_unchanged() {
        let inputs = [
            Fixed {
                kind: "uint256",
                text: "uint256",
            },
            Fixed {
                kind: "uint256",
                text: "uint256",
            },
        ];
        assert_eq!(
            format_selector("sum", &inputs).unwrap(),
            "sum(uint256,uint256)"
        );
    }

    #[test]
    fn test_prefix_only_in_selector_mode() {
        let param = Fixed {
            kind: "struct S",
            text: "(u8)",
        };
        assert_eq!(format_param_override(&param, None).unwrap(), "s(u8)");
        assert_eq!(
            format_param_override(&param, Some(FormatMode::Sighash)).unwrap(),
            "s(u8)"
        );
        assert_eq!(
            format_param_override(&param, Some(FormatMode::Minimal)).unwrap(),
            "minimal:(u8)"
        );
        assert_eq!(
            format_param_override(&param, Some(FormatMode::Full)).unwrap(),
            "full:(u8)"
        );
    }

    #[test]
    fn test_marker_must_be_prefix() {
        let tuple = ParamType::tuple("tuple", vec![ParamType::primitive("bool")]);
        assert_eq!(format_param_override(&tuple, None).unwrap(), "(bool)");

        let lookalike = Fixed {
            kind: "structure",
            text: "structure",
        };
        assert_eq!(format_param_override(&lookalike, None).unwrap(), "structure");
    }

    #[test]
    fn test_struct_vs_tuple_distinct() {
        let members = vec![ParamType::primitive("bool"), ParamType::primitive("u64")];
        let as_struct = [ParamType::tuple("struct P", members.clone())];
        let as_tuple = [ParamType::tuple("tuple", members)];

        let a = format_selector("boo", &as_struct).unwrap();
        let b = format_selector("boo", &as_tuple).unwrap();
        assert_eq!(a, "boo(s(bool,u64))");
        assert_eq!(b, "boo((bool,u64))");
        assert!(as_struct[0].is_struct());
        assert!(!as_tuple[0].is_struct());
    }

    #[test]
    fn test_nested_struct_not_prefixed() {
        let inner = ParamType::tuple("struct Inner", vec![ParamType::primitive("u8")]);
        let outer = ParamType::tuple("struct Outer", vec![inner, ParamType::primitive("b256")]);
        assert_eq!(
            format_selector("f", &[outer]).unwrap(),
            "f(s((u8),b256))"
        );
    }

    #[test]
    fn test_no_inputs() {
        let none: [ParamType; 0] = [];
        assert_eq!(format_selector("foobar", &none).unwrap(), "foobar()");
    }

    #[test]
    fn test_base_error_propagates() {
        let err = format_selector("bad", &[Broken]).unwrap_err();
        assert_eq!(
            err,
            AbiError::MalformedType {
                ty: "struct Broken".into(),
                reason: "no components".into(),
            }
        );
    }
}
