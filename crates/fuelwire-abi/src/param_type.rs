//! Parameter type descriptors and the base type formatter.
//!
//! Formatting follows the Ethereum ABI convention shared by both chains:
//! arrays render as `child[len]`, composites as a parenthesized member list,
//! and everything else as its type string. Bare `uint`/`int` read from JSON
//! are widened to `uint256`/`int256`, as ethers does. The Fuel-specific
//! divergence for structs lives in [`crate::selector`], layered on top of
//! this formatter.

use std::fmt;
use std::str::FromStr;

use crate::error::{AbiError, Result};
use crate::json::JsonParam;

/// Type-string prefix the compiler uses for struct (named record) types.
pub const STRUCT_MARKER: &str = "struct ";

/// Rendering modes understood by the base formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatMode {
    /// Canonical form used to derive selectors: no names, no spaces.
    #[default]
    Sighash,
    /// Human-readable form with composite type names and `indexed`.
    Minimal,
    /// Like `Minimal`, plus parameter names and `", "` separators.
    Full,
    /// A JSON object describing the parameter.
    Json,
}

impl FormatMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FormatMode::Sighash => "sighash",
            FormatMode::Minimal => "minimal",
            FormatMode::Full => "full",
            FormatMode::Json => "json",
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatMode {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sighash" => Ok(FormatMode::Sighash),
            "minimal" => Ok(FormatMode::Minimal),
            "full" => Ok(FormatMode::Full),
            "json" => Ok(FormatMode::Json),
            other => Err(AbiError::UnknownFormat(other.to_string())),
        }
    }
}

/// A type descriptor that can render itself as text.
///
/// This is the seam the selector formatter wraps: it reads [`kind`] to spot
/// struct types and otherwise defers to [`format`].
///
/// [`kind`]: FormatParam::kind
/// [`format`]: FormatParam::format
pub trait FormatParam {
    /// The raw type string, e.g. `u64`, `struct Foo`, `bool[3]`.
    fn kind(&self) -> &str;

    /// Render the descriptor. `None` means the default mode (sighash).
    fn format(&self, mode: Option<FormatMode>) -> Result<String>;
}

/// Structural shape of a parameter type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamShape {
    /// A leaf type such as `u64`, `bool` or `b256`.
    Primitive,
    /// A fixed (`Some`) or dynamic (`None`) length array.
    Array {
        child: Box<ParamType>,
        length: Option<usize>,
    },
    /// A tuple or struct with ordered members.
    Tuple { components: Vec<ParamType> },
}

/// A parsed ABI parameter type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamType {
    pub name: Option<String>,
    pub ty: String,
    pub indexed: bool,
    pub shape: ParamShape,
}

impl ParamType {
    /// A leaf type.
    pub fn primitive(ty: impl Into<String>) -> Self {
        Self {
            name: None,
            ty: ty.into(),
            indexed: false,
            shape: ParamShape::Primitive,
        }
    }

    /// A tuple or struct type. `ty` is `tuple` or `struct <Name>`.
    pub fn tuple(ty: impl Into<String>, components: Vec<ParamType>) -> Self {
        Self {
            name: None,
            ty: ty.into(),
            indexed: false,
            shape: ParamShape::Tuple { components },
        }
    }

    /// An array of `child`; the type string is derived from the child.
    pub fn array(child: ParamType, length: Option<usize>) -> Self {
        let ty = match length {
            Some(len) => format!("{}[{}]", child.ty, len),
            None => format!("{}[]", child.ty),
        };
        Self {
            name: None,
            ty,
            indexed: false,
            shape: ParamShape::Array {
                child: Box::new(child),
                length,
            },
        }
    }

    /// Set the parameter name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Mark the parameter as indexed (event parameters).
    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    /// Whether this is a struct type (as opposed to an anonymous tuple).
    pub fn is_struct(&self) -> bool {
        self.ty.starts_with(STRUCT_MARKER)
    }

    /// Members of the innermost composite, looking through arrays.
    pub fn components(&self) -> Option<&[ParamType]> {
        match &self.shape {
            ParamShape::Primitive => None,
            ParamShape::Array { child, .. } => child.components(),
            ParamShape::Tuple { components } => Some(components),
        }
    }

    /// Build a descriptor from a JSON ABI entry, rejecting malformed shapes.
    pub fn from_json(param: &JsonParam) -> Result<Self> {
        let mut parsed = Self::parse(&param.ty, param.components.as_deref()).map_err(|e| {
            tracing::warn!(ty = %param.ty, error = %e, "rejected ABI parameter");
            e
        })?;
        parsed.name = param.name.clone().filter(|n| !n.is_empty());
        parsed.indexed = param.indexed.unwrap_or(false);
        Ok(parsed)
    }

    /// Convert back to a JSON ABI entry.
    pub fn to_json(&self) -> JsonParam {
        JsonParam {
            name: self.name.clone(),
            ty: self.ty.clone(),
            indexed: self.indexed.then_some(true),
            components: self
                .components()
                .map(|members| members.iter().map(ParamType::to_json).collect()),
        }
    }

    /// Parse a type string. Array children inherit the components, since the
    /// JSON form hangs them off the outer array entry.
    fn parse(ty: &str, components: Option<&[JsonParam]>) -> Result<Self> {
        let widened = widen_integer(ty);
        let ty = widened.as_str();
        if ty.is_empty() {
            return Err(AbiError::malformed(ty, "empty type"));
        }

        if let Some(prefix) = ty.strip_suffix(']') {
            let open = prefix
                .rfind('[')
                .ok_or_else(|| AbiError::malformed(ty, "unbalanced array brackets"))?;
            let len_str = &prefix[open + 1..];
            let length = if len_str.is_empty() {
                None
            } else {
                let len = len_str.parse::<usize>().map_err(|_| {
                    AbiError::malformed(ty, format!("invalid array length {:?}", len_str))
                })?;
                Some(len)
            };
            let child = Self::parse(&prefix[..open], components)?;
            return Ok(Self {
                name: None,
                ty: ty.to_string(),
                indexed: false,
                shape: ParamShape::Array {
                    child: Box::new(child),
                    length,
                },
            });
        }

        if ty.contains(|c: char| c == '[' || c == ']') {
            return Err(AbiError::malformed(ty, "unbalanced array brackets"));
        }

        match components {
            Some(members) => {
                let members = members
                    .iter()
                    .map(ParamType::from_json)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::tuple(ty, members))
            }
            None if ty == "tuple" || ty.starts_with(STRUCT_MARKER) => {
                Err(AbiError::malformed(ty, "composite type has no components"))
            }
            None => Ok(Self::primitive(ty)),
        }
    }

    fn format_with(&self, mode: FormatMode) -> Result<String> {
        if self.ty.is_empty() {
            return Err(AbiError::malformed(&self.ty, "empty type"));
        }
        if mode == FormatMode::Json {
            return Ok(serde_json::to_string(&self.to_json())?);
        }

        let mut out = String::new();
        match &self.shape {
            ParamShape::Array { child, length } => {
                out.push_str(&child.format_with(mode)?);
                out.push('[');
                if let Some(len) = length {
                    out.push_str(&len.to_string());
                }
                out.push(']');
            }
            ParamShape::Tuple { components } => {
                if mode != FormatMode::Sighash {
                    out.push_str(&self.ty);
                }
                let separator = if mode == FormatMode::Full { ", " } else { "," };
                let members = components
                    .iter()
                    .map(|c| c.format_with(mode))
                    .collect::<Result<Vec<_>>>()?;
                out.push('(');
                out.push_str(&members.join(separator));
                out.push(')');
            }
            ParamShape::Primitive => out.push_str(&self.ty),
        }

        if mode != FormatMode::Sighash {
            if self.indexed {
                out.push_str(" indexed");
            }
            if let (FormatMode::Full, Some(name)) = (mode, &self.name) {
                out.push(' ');
                out.push_str(name);
            }
        }

        Ok(out)
    }
}

/// Expand the unsized `uint`/`int` aliases, keeping any array suffix.
fn widen_integer(ty: &str) -> String {
    for (alias, full) in [("uint", "uint256"), ("int", "int256")] {
        if let Some(rest) = ty.strip_prefix(alias) {
            if rest.is_empty() || rest.starts_with('[') {
                return format!("{}{}", full, rest);
            }
        }
    }
    ty.to_string()
}

impl FormatParam for ParamType {
    fn kind(&self) -> &str {
        &self.ty
    }

    fn format(&self, mode: Option<FormatMode>) -> Result<String> {
        self.format_with(mode.unwrap_or_default())
    }
}
