//! Groth16 proof-to-calldata encoding.
//!
//! This crate turns the JSON proof artifacts produced by an external proving
//! toolchain into the argument tuple a deployed Groth16 verifier contract
//! expects for `verifyProof(a, b, c, input)`:
//!
//! - decimal-string field elements become `0x`-prefixed lowercase hex
//! - the G2 point's inner coordinate pairs are swapped into verifier order
//! - public signals pass through element-wise, order and length preserved
//!
//! The encoder is pure and deterministic; it performs no I/O of its own.
//! Artifact loading lives in [`artifacts`], and submission to a chain is a
//! separate concern handled by a contract client elsewhere.
//!
//! # Example
//!
//! ```
//! use relay_calldata::{PublicSignals, encode, load_proof};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = tempfile::tempdir()?;
//! # let path = dir.path().join("proof.json");
//! # std::fs::write(&path, r#"{"pi_a":["10","20"],"pi_b":[["1","2"],["3","4"]],"pi_c":["5","6"]}"#)?;
//! let proof = load_proof(&path)?;
//! let signals = PublicSignals(vec!["7".into(), "8".into()]);
//!
//! let calldata = encode(&proof, &signals)?;
//! assert_eq!(calldata.a, ["0xa".to_string(), "0x14".to_string()]);
//! # Ok(())
//! # }
//! ```

pub mod artifacts;
pub mod encode;
pub mod felt;
pub mod proof;

pub use artifacts::{ArtifactError, load_proof, load_public_signals};
pub use encode::{Calldata, EncodeError, encode};
pub use felt::decimal_to_hex;
pub use proof::{Proof, PublicSignals};
