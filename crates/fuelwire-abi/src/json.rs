//! JSON ABI entries as emitted by the contract compiler.
//!
//! Compilers emit `null` for empty component and parameter lists, so every
//! list here is optional and `null` is read as absent.

use serde::{Deserialize, Serialize};

/// A parameter entry of a JSON ABI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<JsonParam>>,
}

impl JsonParam {
    /// A named parameter with no components.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: ty.into(),
            ..Default::default()
        }
    }

    /// An unnamed parameter with no components.
    pub fn unnamed(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            ..Default::default()
        }
    }

    /// Attach component entries (tuple and struct members).
    pub fn with_components(mut self, components: Vec<JsonParam>) -> Self {
        self.components = Some(components);
        self
    }
}

/// A top-level JSON ABI entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonFragment {
    /// `function`, `event`, `constructor`, ... Absent means `function`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<JsonParam>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<JsonParam>>,
}

/// Parse a whole JSON ABI (an array of entries).
pub fn parse_abi(json: &str) -> crate::Result<Vec<JsonFragment>> {
    Ok(serde_json::from_str(json)?)
}
