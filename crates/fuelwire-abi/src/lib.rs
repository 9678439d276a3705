//! # fuelwire ABI
//!
//! Parameter type descriptors and function selector signatures.
//!
//! The base formatter ([`ParamType`] via [`FormatParam`]) follows the
//! Ethereum convention. [`format_selector`] wraps it with the one rule where
//! Fuel differs: struct parameters are prefixed with `s`.
//!
//! ```rust
//! use fuelwire_abi::{FunctionFragment, ParamType};
//!
//! let point = ParamType::tuple(
//!     "struct Point",
//!     vec![ParamType::primitive("u64"), ParamType::primitive("u64")],
//! );
//! let f = FunctionFragment::new("move_to", vec![point], vec![]);
//! assert_eq!(f.format().unwrap(), "move_to(s(u64,u64))");
//! ```

pub mod error;
pub mod fragment;
pub mod json;
pub mod param_type;
pub mod selector;

pub use error::{AbiError, Result};
pub use fragment::{functions_from_abi, FunctionFragment};
pub use json::{parse_abi, JsonFragment, JsonParam};
pub use param_type::{FormatMode, FormatParam, ParamShape, ParamType, STRUCT_MARKER};
pub use selector::{format_param_override, format_selector, STRUCT_SELECTOR_PREFIX};
