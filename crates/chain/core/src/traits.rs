//! Contract client abstraction.
//!
//! The chain SDK is an external collaborator; this module defines the
//! capability object the orchestration layer is handed instead of relying on
//! ambient, process-wide SDK state. Two operations cover everything the
//! relay needs: deploy a named contract, and call a method with given
//! calldata then await confirmation.

use async_trait::async_trait;

use crate::types::{CallArgs, CallReceipt, ContractAddress};

/// Transport layer errors.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("transaction failed: {0}")]
    TransactionFailed(String),

    #[error("unknown contract: {0}")]
    UnknownContract(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("backend-specific error: {0}")]
    Backend(String),
}

/// Chain access capability.
///
/// Implementations wrap a concrete chain SDK (signer, network selection, fee
/// handling included); callers only see these two operations. A confirmed
/// call yields a receipt whose transaction id the relay logs but does not
/// otherwise interpret.
#[async_trait]
pub trait ContractClient: Send + Sync {
    /// Deploy a named compiled contract and return its address.
    async fn deploy(&self, contract: &str) -> Result<ContractAddress, TransportError>;

    /// Call a contract method with positional arguments and await
    /// confirmation.
    async fn call(
        &self,
        address: &ContractAddress,
        method: &str,
        args: CallArgs,
    ) -> Result<CallReceipt, TransportError>;
}
