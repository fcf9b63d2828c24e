//! Verifier deployment and proof submission orchestration.
//!
//! Thin layer between the encoder and the injected [`ContractClient`]: it
//! encodes, hands the calldata to the client, and logs the confirmed
//! transaction id. All chain policy (fees, nonces, retries, timeouts)
//! belongs to the client implementation.

use relay_calldata::{EncodeError, Proof, PublicSignals, encode};

use crate::traits::{ContractClient, TransportError};
use crate::types::{CallArgs, CallReceipt, ContractAddress};

/// Verifier entry point for proof verification.
pub const VERIFY_METHOD: &str = "verifyProof";

/// Errors raised while relaying a proof to the verifier.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("proof encoding failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Proof relay over an injected contract client.
pub struct ProofRelay<C> {
    client: C,
}

impl<C: ContractClient> ProofRelay<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Deploy a named verifier contract and return its address.
    pub async fn deploy_verifier(&self, contract: &str) -> Result<ContractAddress, TransportError> {
        tracing::info!("Deploying verifier contract {contract}");

        let address = self.client.deploy(contract).await?;

        tracing::info!("Verifier deployed to {address}");
        Ok(address)
    }

    /// Encode a proof and submit it to the verifier's `verifyProof` method,
    /// awaiting confirmation.
    ///
    /// The returned receipt is the client's word that the transaction
    /// confirmed; whether the proof actually verified is the contract's
    /// verdict, surfaced by the client as a failed transaction.
    pub async fn submit_proof(
        &self,
        verifier: &ContractAddress,
        proof: &Proof,
        signals: &PublicSignals,
    ) -> Result<CallReceipt, SubmitError> {
        let calldata = encode(proof, signals)?;
        tracing::debug!(
            public_signals = signals.len(),
            "Proof encoded for {VERIFY_METHOD}"
        );

        let receipt = self
            .client
            .call(verifier, VERIFY_METHOD, CallArgs::from(&calldata))
            .await?;

        tracing::info!(
            "Proof verification transaction confirmed: {}",
            receipt.transaction_id
        );
        Ok(receipt)
    }
}
