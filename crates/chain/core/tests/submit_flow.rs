//! Artifact-to-chain submission flow against the mock client.
//!
//! Mirrors the operational path end to end: proof and public-signal
//! documents on disk, loaded and encoded, then relayed to a deployed
//! verifier, asserting the exact argument tuple that crosses the chain
//! boundary.

use std::fs;

use serde_json::json;

use relay_calldata::{load_proof, load_public_signals};
use relay_chain_core::{MockContractClient, ProofRelay, TransactionStatus, VERIFY_METHOD};

#[tokio::test]
async fn relays_disk_artifacts_to_deployed_verifier() {
    let dir = tempfile::tempdir().unwrap();

    let proof_path = dir.path().join("proof.json");
    fs::write(
        &proof_path,
        r#"{
            "pi_a": ["10", "20", "1"],
            "pi_b": [["1", "2"], ["3", "4"], ["1", "0"]],
            "pi_c": ["5", "6", "1"],
            "protocol": "groth16",
            "curve": "bn128"
        }"#,
    )
    .unwrap();

    let public_path = dir.path().join("public.json");
    fs::write(&public_path, r#"["7", "8"]"#).unwrap();

    let proof = load_proof(&proof_path).unwrap();
    let signals = load_public_signals(&public_path).unwrap();

    let client = MockContractClient::new();
    let relay = ProofRelay::new(client.clone());

    let verifier = relay.deploy_verifier("Groth16Verifier").await.unwrap();
    let receipt = relay
        .submit_proof(&verifier, &proof, &signals)
        .await
        .unwrap();

    assert!(matches!(
        receipt.status,
        TransactionStatus::Confirmed { .. }
    ));
    assert!(receipt.transaction_id.to_string().starts_with("0x"));

    let calls = client.recorded_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, VERIFY_METHOD);
    assert_eq!(
        calls[0].args.as_slice(),
        &[
            json!(["0xa", "0x14"]),
            json!([["0x2", "0x1"], ["0x4", "0x3"]]),
            json!(["0x5", "0x6"]),
            json!(["0x7", "0x8"]),
        ]
    );
}

#[tokio::test]
async fn separate_submissions_yield_separate_transactions() {
    let proof = serde_json::from_value(json!({
        "pi_a": ["1", "2"],
        "pi_b": [["3", "4"], ["5", "6"]],
        "pi_c": ["7", "8"]
    }))
    .unwrap();
    let signals = relay_calldata::PublicSignals(vec![json!("9")]);

    let client = MockContractClient::new();
    let relay = ProofRelay::new(client.clone());
    let verifier = relay.deploy_verifier("Groth16Verifier").await.unwrap();

    let first = relay.submit_proof(&verifier, &proof, &signals).await.unwrap();
    let second = relay.submit_proof(&verifier, &proof, &signals).await.unwrap();

    assert_ne!(first.transaction_id, second.transaction_id);

    // Identical inputs encode to identical calldata on both submissions.
    let calls = client.recorded_calls();
    assert_eq!(calls[0].args, calls[1].args);
}
