//! Common types for contract interactions.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use relay_calldata::Calldata;

/// Address of a deployed contract.
///
/// Stored as the chain's canonical string form (hex for EVM-style chains).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractAddress(String);

impl ContractAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generic transaction identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionId(pub Vec<u8>);

impl TransactionId {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

/// Transaction status on the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Transaction is pending in the mempool
    Pending,

    /// Transaction is confirmed on-chain
    Confirmed { block_height: u64 },

    /// Transaction failed on-chain
    Failed { error: String },
}

/// Positional arguments for a contract method call.
///
/// The source convention spreads the calldata tuple into call arguments;
/// this is its explicit equivalent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallArgs(pub Vec<Value>);

impl CallArgs {
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl From<&Calldata> for CallArgs {
    fn from(calldata: &Calldata) -> Self {
        Self(calldata.to_args().to_vec())
    }
}

/// Result of a confirmed contract call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallReceipt {
    /// Transaction id on the chain
    pub transaction_id: TransactionId,

    /// Final transaction status
    pub status: TransactionStatus,
}
