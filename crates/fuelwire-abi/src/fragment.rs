//! Function fragments: a parsed function entry of a contract ABI.

use crate::error::{AbiError, Result};
use crate::json::{parse_abi, JsonFragment};
use crate::param_type::ParamType;
use crate::selector::format_selector;

/// A contract function: name plus ordered input and output types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionFragment {
    pub name: String,
    pub inputs: Vec<ParamType>,
    pub outputs: Vec<ParamType>,
}

impl FunctionFragment {
    /// Create a fragment from already-parsed parameter types.
    pub fn new(name: impl Into<String>, inputs: Vec<ParamType>, outputs: Vec<ParamType>) -> Self {
        Self {
            name: name.into(),
            inputs,
            outputs,
        }
    }

    /// Build a fragment from a JSON ABI entry.
    ///
    /// Missing or `null` parameter lists are read as empty.
    pub fn from_json(value: &JsonFragment) -> Result<Self> {
        match value.ty.as_deref() {
            None | Some("function") => {}
            Some(other) => return Err(AbiError::UnexpectedFragment(other.to_string())),
        }

        let name = match value.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(AbiError::MissingName),
        };

        let inputs = value
            .inputs
            .iter()
            .flatten()
            .map(ParamType::from_json)
            .collect::<Result<Vec<_>>>()?;
        let outputs = value
            .outputs
            .iter()
            .flatten()
            .map(ParamType::from_json)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(name, inputs, outputs))
    }

    /// Build a fragment from a single JSON ABI entry in text form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: JsonFragment = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    /// The selector signature, e.g. `boo(s(bool,u64))`.
    pub fn format(&self) -> Result<String> {
        format_selector(&self.name, &self.inputs)
    }
}

/// Collect every function of a JSON ABI, skipping events and other entries.
pub fn functions_from_abi(json: &str) -> Result<Vec<FunctionFragment>> {
    parse_abi(json)?
        .iter()
        .filter(|entry| matches!(entry.ty.as_deref(), None | Some("function")))
        .map(FunctionFragment::from_json)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::JsonParam;

    #[test]
    fn test_from_json_struct_input() {
        let json = r#"{
            "type": "function",
            "name": "boo",
            "inputs": [{
                "name": "value",
                "type": "struct TestStruct",
                "components": [
                    {"name": "a", "type": "bool", "components": null},
                    {"name": "b", "type": "u64", "components": null}
                ]
            }],
            "outputs": [{
                "name": "",
                "type": "struct TestStruct",
                "components": [
                    {"name": "a", "type": "bool", "components": null},
                    {"name": "b", "type": "u64", "components": null}
                ]
            }]
        }"#;
        let fragment = FunctionFragment::from_json_str(json).unwrap();
        assert_eq!(fragment.format().unwrap(), "boo(s(bool,u64))");
        assert_eq!(fragment.outputs.len(), 1);
        assert_eq!(fragment.outputs[0].name, None);
    }

    #[test]
    fn test_from_json_null_inputs() {
        let fragment = FunctionFragment::from_json(&JsonFragment {
            ty: Some("function".into()),
            name: Some("foobar".into()),
            inputs: None,
            outputs: Some(vec![JsonParam::unnamed("u64")]),
        })
        .unwrap();
        assert!(fragment.inputs.is_empty());
        assert_eq!(fragment.format().unwrap(), "foobar()");
    }

    #[test]
    fn test_rejects_non_function() {
        let value = JsonFragment {
            ty: Some("event".into()),
            name: Some("Transfer".into()),
            ..Default::default()
        };
        assert_eq!(
            FunctionFragment::from_json(&value),
            Err(AbiError::UnexpectedFragment("event".into()))
        );
    }

    #[test]
    fn test_rejects_missing_name() {
        let value = JsonFragment {
            ty: Some("function".into()),
            ..Default::default()
        };
        assert_eq!(FunctionFragment::from_json(&value), Err(AbiError::MissingName));
    }

    #[test]
    fn test_malformed_input_propagates() {
        let value = JsonFragment {
            name: Some("bad".into()),
            inputs: Some(vec![JsonParam::new("x", "tuple")]),
            ..Default::default()
        };
        assert!(matches!(
            FunctionFragment::from_json(&value),
            Err(AbiError::MalformedType { .. })
        ));
    }

    #[test]
    fn test_functions_from_abi_skips_events() {
        let abi = r#"[
            {"type": "function", "name": "sum", "inputs": [
                {"name": "a", "type": "u64"}, {"name": "b", "type": "u64"}
            ]},
            {"type": "event", "name": "Log", "inputs": []},
            {"type": "function", "name": "return_void", "outputs": [{"type": "()"}]}
        ]"#;
        let functions = functions_from_abi(abi).unwrap();
        let signatures: Vec<String> = functions.iter().map(|f| f.format().unwrap()).collect();
        assert_eq!(signatures, vec!["sum(u64,u64)", "return_void()"]);
    }
}
