//! Mock contract client for testing without a network.
//!
//! Simulates deployment and contract calls in-memory with deterministic
//! addresses and transaction ids, and records every call so tests can assert
//! on the exact calldata that reached the chain boundary.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::traits::{ContractClient, TransportError};
use crate::types::{CallArgs, CallReceipt, ContractAddress, TransactionId, TransactionStatus};

/// A contract call observed by the mock.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub address: ContractAddress,
    pub method: String,
    pub args: CallArgs,
}

/// In-memory contract client.
///
/// Deployed addresses and transaction ids are derived from a counter, so a
/// test run is fully deterministic. Cloning shares the underlying state.
#[derive(Clone, Default)]
pub struct MockContractClient {
    deployments: Arc<Mutex<HashMap<String, ContractAddress>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    transaction_counter: Arc<Mutex<u64>>,
}

impl MockContractClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls observed so far, in submission order.
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Address a named contract was deployed to, if any.
    pub fn deployed_address(&self, contract: &str) -> Option<ContractAddress> {
        self.deployments.lock().unwrap().get(contract).cloned()
    }

    fn next_transaction_id(&self) -> TransactionId {
        let mut counter = self.transaction_counter.lock().unwrap();
        *counter += 1;

        // 32-byte id ending in the counter, like a chain digest would.
        let mut bytes = vec![0u8; 24];
        bytes.extend_from_slice(&counter.to_be_bytes());
        TransactionId::from_bytes(bytes)
    }
}

#[async_trait]
impl ContractClient for MockContractClient {
    async fn deploy(&self, contract: &str) -> Result<ContractAddress, TransportError> {
        let mut deployments = self.deployments.lock().unwrap();
        let index = deployments.len() as u64 + 1;
        let address = ContractAddress::new(format!("0x{index:040x}"));
        deployments.insert(contract.to_string(), address.clone());
        Ok(address)
    }

    async fn call(
        &self,
        address: &ContractAddress,
        method: &str,
        args: CallArgs,
    ) -> Result<CallReceipt, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            address: address.clone(),
            method: method.to_string(),
            args,
        });

        Ok(CallReceipt {
            transaction_id: self.next_transaction_id(),
            status: TransactionStatus::Confirmed { block_height: 1 },
        })
    }
}
