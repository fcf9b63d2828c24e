//! End-to-end encoding of realistic proving-toolchain artifacts.
//!
//! Exercises the full load-then-encode path with BN254-sized field elements
//! as snarkjs emits them, including the homogeneous third coordinates the
//! encoder must ignore.

use std::fs;

use num_bigint::BigUint;
use relay_calldata::{encode, load_proof, load_public_signals};

const PROOF_JSON: &str = r#"{
    "pi_a": [
        "20491192805390485299153009773594534940189261866228447918068658471970481763042",
        "9383485363053290200918347156157836566562967994039712273449902621266178545958",
        "1"
    ],
    "pi_b": [
        [
            "4252822878758300859123897981450591353533073413197771768651442665752259397132",
            "6375614351688725206403948262868962793625744043794305715222011528459656738731"
        ],
        [
            "21847035105528745403288232691147584728191162732299865338377159692350059136679",
            "10505242626370262277552901082094356697409835680220590971873171140371331206856"
        ],
        ["1", "0"]
    ],
    "pi_c": [
        "4082367875863433681332203403145435568316851327593401208105741076214120093531",
        "8495653923123431417604973247489272438418190587263600148770280649306958101930",
        "1"
    ],
    "protocol": "groth16",
    "curve": "bn128"
}"#;

const PUBLIC_JSON: &str = r#"[
    "33",
    "0",
    "21888242871839275222246405745257275088548364400416034343698204186575808495616"
]"#;

#[test]
fn loads_and_encodes_full_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let proof_path = dir.path().join("proof.json");
    let public_path = dir.path().join("public.json");
    fs::write(&proof_path, PROOF_JSON).unwrap();
    fs::write(&public_path, PUBLIC_JSON).unwrap();

    let proof = load_proof(&proof_path).unwrap();
    let signals = load_public_signals(&public_path).unwrap();

    let calldata = encode(&proof, &signals).unwrap();

    // Every leaf is 0x-prefixed lowercase hex.
    let leaves = calldata
        .a
        .iter()
        .chain(calldata.b.iter().flatten())
        .chain(calldata.c.iter())
        .chain(calldata.input.iter());
    for leaf in leaves {
        let digits = leaf.strip_prefix("0x").expect("missing 0x prefix");
        assert!(!digits.is_empty());
        assert!(
            digits
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
            "non-hex or uppercase digit in {leaf}"
        );
        assert!(
            digits == "0" || !digits.starts_with('0'),
            "padded hex in {leaf}"
        );
    }

    // Numeric fidelity survives the ~254-bit round trip.
    let a0 = BigUint::parse_bytes(calldata.a[0].trim_start_matches("0x").as_bytes(), 16).unwrap();
    assert_eq!(
        a0.to_str_radix(10),
        "20491192805390485299153009773594534940189261866228447918068658471970481763042"
    );

    // The G2 swap puts each pair's second toolchain component first.
    let b00 = BigUint::parse_bytes(calldata.b[0][0].trim_start_matches("0x").as_bytes(), 16)
        .unwrap()
        .to_str_radix(10);
    assert_eq!(
        b00,
        "6375614351688725206403948262868962793625744043794305715222011528459656738731"
    );

    // Signals keep order and length; zero encodes as 0x0.
    assert_eq!(calldata.input.len(), 3);
    assert_eq!(calldata.input[0], "0x21");
    assert_eq!(calldata.input[1], "0x0");
}
