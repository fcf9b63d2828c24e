//! Chain abstraction layer for the proof relay.
//!
//! # Architecture
//!
//! ```text
//! ProofRelay (orchestration: deploy verifier, submit proof)
//!     │
//! ContractClient (capability trait: deploy, call-and-await)
//!     │
//! concrete backend (chain SDK wrapper) / MockContractClient (tests)
//! ```
//!
//! # Design Philosophy
//!
//! The chain SDK stays behind the [`ContractClient`] trait: orchestration
//! code receives the capability object explicitly instead of reaching for
//! ambient network/signer state. The relay's contract ends at handing over
//! faithful calldata; confirmation semantics and transaction policy live in
//! the backend.
//!
//! # Usage
//!
//! ```
//! use relay_calldata::{Proof, PublicSignals};
//! use relay_chain_core::{MockContractClient, ProofRelay};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let relay = ProofRelay::new(MockContractClient::new());
//! let verifier = relay.deploy_verifier("Groth16Verifier").await?;
//!
//! let proof: Proof = serde_json::from_str(
//!     r#"{"pi_a":["10","20"],"pi_b":[["1","2"],["3","4"]],"pi_c":["5","6"]}"#,
//! )?;
//! let signals = PublicSignals(vec!["7".into(), "8".into()]);
//!
//! let receipt = relay.submit_proof(&verifier, &proof, &signals).await?;
//! println!("confirmed: {}", receipt.transaction_id);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod submit;
pub mod traits;
pub mod types;

// Re-export the capability surface
pub use traits::{ContractClient, TransportError};

// Re-export orchestration
pub use submit::{ProofRelay, SubmitError, VERIFY_METHOD};

// Re-export all types
pub use types::{CallArgs, CallReceipt, ContractAddress, TransactionId, TransactionStatus};

pub use mock::MockContractClient;
