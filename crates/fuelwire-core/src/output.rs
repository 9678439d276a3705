//! Transaction outputs.
//!
//! An output is one of six fixed record shapes, selected by an 8-byte
//! discriminant. Values are immutable once built and own all of their bytes.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::types::{Bytes32, BYTES32_LEN};

/// Width in bytes of every integer field on the wire (discriminant included).
pub const WORD_SIZE: usize = 8;

/// The kind of output, which fixes the record layout that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u64)]
pub enum OutputType {
    Coin = 0,
    Contract = 1,
    Withdrawal = 2,
    Change = 3,
    Variable = 4,
    ContractCreated = 5,
}

impl OutputType {
    /// Every output type, in discriminant order.
    pub const ALL: [OutputType; 6] = [
        OutputType::Coin,
        OutputType::Contract,
        OutputType::Withdrawal,
        OutputType::Change,
        OutputType::Variable,
        OutputType::ContractCreated,
    ];

    /// Convert to the wire discriminant.
    pub fn to_u64(self) -> u64 {
        self as u64
    }

    /// Try to parse from a wire discriminant.
    pub fn from_u64(value: u64) -> Option<Self> {
        match value {
            0 => Some(Self::Coin),
            1 => Some(Self::Contract),
            2 => Some(Self::Withdrawal),
            3 => Some(Self::Change),
            4 => Some(Self::Variable),
            5 => Some(Self::ContractCreated),
            _ => None,
        }
    }

    /// Total encoded size of a record of this type, discriminant included.
    pub const fn encoded_len(self) -> usize {
        match self {
            // discriminant + to + amount + asset_id
            Self::Coin | Self::Withdrawal | Self::Change | Self::Variable => {
                WORD_SIZE + BYTES32_LEN + WORD_SIZE + BYTES32_LEN
            }
            // discriminant + input_index + balance_root + state_root
            Self::Contract => WORD_SIZE + WORD_SIZE + BYTES32_LEN + BYTES32_LEN,
            // discriminant + contract_id + state_root
            Self::ContractCreated => WORD_SIZE + BYTES32_LEN + BYTES32_LEN,
        }
    }
}

impl TryFrom<u64> for OutputType {
    type Error = DecodeError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_u64(value).ok_or(DecodeError::UnknownVariant(value))
    }
}

/// A single transaction output.
///
/// The JSON form is an object tagged by variant name (`"type": "Coin"`) with
/// camel-cased field names, hashes as `0x` hex and amounts as plain numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Output {
    /// Sends `amount` of `asset_id` to `to`.
    #[serde(rename_all = "camelCase")]
    Coin {
        to: Bytes32,
        amount: u64,
        asset_id: Bytes32,
    },

    /// Re-emits the contract consumed by input `input_index`.
    #[serde(rename_all = "camelCase")]
    Contract {
        input_index: u64,
        balance_root: Bytes32,
        state_root: Bytes32,
    },

    /// Withdraws to the settlement layer.
    #[serde(rename_all = "camelCase")]
    Withdrawal {
        to: Bytes32,
        amount: u64,
        asset_id: Bytes32,
    },

    /// Returns the unspent remainder of `asset_id` to `to`.
    #[serde(rename_all = "camelCase")]
    Change {
        to: Bytes32,
        amount: u64,
        asset_id: Bytes32,
    },

    /// An output whose values are filled in during execution.
    #[serde(rename_all = "camelCase")]
    Variable {
        to: Bytes32,
        amount: u64,
        asset_id: Bytes32,
    },

    /// A contract created by this transaction.
    #[serde(rename_all = "camelCase")]
    ContractCreated {
        contract_id: Bytes32,
        state_root: Bytes32,
    },
}

impl Output {
    /// The variant kind of this output.
    pub fn output_type(&self) -> OutputType {
        match self {
            Output::Coin { .. } => OutputType::Coin,
            Output::Contract { .. } => OutputType::Contract,
            Output::Withdrawal { .. } => OutputType::Withdrawal,
            Output::Change { .. } => OutputType::Change,
            Output::Variable { .. } => OutputType::Variable,
            Output::ContractCreated { .. } => OutputType::ContractCreated,
        }
    }

    /// Number of bytes this output occupies on the wire.
    pub fn encoded_len(&self) -> usize {
        self.output_type().encoded_len()
    }

    /// Create a coin output.
    pub fn coin(to: Bytes32, amount: u64, asset_id: Bytes32) -> Self {
        Output::Coin {
            to,
            amount,
            asset_id,
        }
    }

    /// Create a contract output.
    pub fn contract(input_index: u64, balance_root: Bytes32, state_root: Bytes32) -> Self {
        Output::Contract {
            input_index,
            balance_root,
            state_root,
        }
    }

    /// Create a withdrawal output.
    pub fn withdrawal(to: Bytes32, amount: u64, asset_id: Bytes32) -> Self {
        Output::Withdrawal {
            to,
            amount,
            asset_id,
        }
    }

    /// Create a change output.
    pub fn change(to: Bytes32, amount: u64, asset_id: Bytes32) -> Self {
        Output::Change {
            to,
            amount,
            asset_id,
        }
    }

    /// Create a variable output.
    pub fn variable(to: Bytes32, amount: u64, asset_id: Bytes32) -> Self {
        Output::Variable {
            to,
            amount,
            asset_id,
        }
    }

    /// Create a contract-created output.
    pub fn contract_created(contract_id: Bytes32, state_root: Bytes32) -> Self {
        Output::ContractCreated {
            contract_id,
            state_root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_type_roundtrip() {
        for ty in OutputType::ALL {
            assert_eq!(OutputType::from_u64(ty.to_u64()), Some(ty));
        }
        assert_eq!(OutputType::from_u64(6), None);
        assert_eq!(OutputType::from_u64(u64::MAX), None);
    }

    #[test]
    fn test_try_from_unknown() {
        assert_eq!(OutputType::try_from(6), Err(DecodeError::UnknownVariant(6)));
        assert_eq!(OutputType::try_from(5), Ok(OutputType::ContractCreated));
    }

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(OutputType::Coin.encoded_len(), 80);
        assert_eq!(OutputType::Contract.encoded_len(), 80);
        assert_eq!(OutputType::Withdrawal.encoded_len(), 80);
        assert_eq!(OutputType::Change.encoded_len(), 80);
        assert_eq!(OutputType::Variable.encoded_len(), 80);
        assert_eq!(OutputType::ContractCreated.encoded_len(), 72);
    }

    #[test]
    fn test_output_type_of_constructors() {
        let h = Bytes32::from_bytes([1; 32]);
        assert_eq!(Output::coin(h, 1, h).output_type(), OutputType::Coin);
        assert_eq!(Output::contract(0, h, h).output_type(), OutputType::Contract);
        assert_eq!(Output::withdrawal(h, 1, h).output_type(), OutputType::Withdrawal);
        assert_eq!(Output::change(h, 1, h).output_type(), OutputType::Change);
        assert_eq!(Output::variable(h, 1, h).output_type(), OutputType::Variable);
        assert_eq!(
            Output::contract_created(h, h).output_type(),
            OutputType::ContractCreated
        );
    }

    #[test]
    fn test_json_shape() {
        let output = Output::coin(Bytes32::ZERO, 42, Bytes32::from_bytes([0xff; 32]));
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["type"], "Coin");
        assert_eq!(json["amount"], 42);
        assert_eq!(json["to"], Bytes32::ZERO.to_hex());
        assert_eq!(json["assetId"], format!("0x{}", "ff".repeat(32)));

        let back: Output = serde_json::from_value(json).unwrap();
        assert_eq!(back, output);
    }

    #[test]
    fn test_json_contract_fields() {
        let output = Output::contract(3, Bytes32::ZERO, Bytes32::ZERO);
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["type"], "Contract");
        assert_eq!(json["inputIndex"], 3);
        assert!(json.get("balanceRoot").is_some());
        assert!(json.get("stateRoot").is_some());
    }
}
