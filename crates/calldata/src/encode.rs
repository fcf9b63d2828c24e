//! Proof-to-calldata encoding.
//!
//! Reshapes a Groth16 proof and its public signals into the argument tuple
//! the verifier contract's `verifyProof(a, b, c, input)` entry point expects,
//! converting every field element from decimal to hex along the way.
//!
//! Encoding is a pure function of its inputs: no I/O, no shared state, and
//! identical inputs always produce identical calldata.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::felt::leaf_to_hex;
use crate::proof::{Proof, PublicSignals};

/// Errors raised while encoding a proof into calldata.
///
/// Both variants are terminal: encoding either fully succeeds or fails as a
/// whole, never returning a partial tuple.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// A leaf value is not a parseable non-negative integer.
    #[error("invalid field element at {path}: {value} is not a non-negative integer")]
    InvalidFieldElement { path: String, value: String },

    /// A proof coordinate is missing or has the wrong nesting.
    #[error("malformed proof shape at {path}: expected {expected}, found {found}")]
    MalformedProofShape {
        path: String,
        expected: String,
        found: String,
    },
}

/// Argument tuple for `verifyProof(a, b, c, input)`.
///
/// Every leaf is a `0x`-prefixed lowercase hex string with no fixed padding
/// width. `input` preserves the public-signal order and length exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calldata {
    pub a: [String; 2],
    pub b: [[String; 2]; 2],
    pub c: [String; 2],
    pub input: Vec<String>,
}

impl Calldata {
    /// The four positional JSON arguments, in `verifyProof` order.
    pub fn to_args(&self) -> [Value; 4] {
        [
            json!(self.a),
            json!(self.b),
            json!(self.c),
            json!(self.input),
        ]
    }
}

/// Encode a proof and its public signals into verifier calldata.
///
/// `pi_a` and `pi_c` pass through coordinate-wise. `pi_b` keeps its row
/// order but swaps each inner coordinate pair: the proving toolchain
/// serializes G2 components as `(c0, c1)` while the verifier expects
/// `(c1, c0)`. Omitting the swap yields a structurally valid call the
/// verifier will reject.
pub fn encode(proof: &Proof, signals: &PublicSignals) -> Result<Calldata, EncodeError> {
    let a = g1_point(&proof.pi_a, "pi_a")?;
    let b = g2_point(&proof.pi_b)?;
    let c = g1_point(&proof.pi_c, "pi_c")?;

    let mut input = Vec::with_capacity(signals.len());
    for (index, leaf) in signals.as_slice().iter().enumerate() {
        input.push(leaf_to_hex(leaf, &format!("publicSignals[{index}]"))?);
    }

    Ok(Calldata { a, b, c, input })
}

/// Affine G1 coordinates. A third homogeneous coordinate may trail the pair
/// and is ignored.
fn g1_point(coordinates: &[Value], name: &str) -> Result<[String; 2], EncodeError> {
    if coordinates.len() < 2 {
        return Err(shape_error(
            name,
            "array of at least 2 field elements",
            format!("array of length {}", coordinates.len()),
        ));
    }

    Ok([
        leaf_to_hex(&coordinates[0], &format!("{name}[0]"))?,
        leaf_to_hex(&coordinates[1], &format!("{name}[1]"))?,
    ])
}

/// G2 coordinate rows. An optional third (homogeneous) row is ignored.
fn g2_point(rows: &[Value]) -> Result<[[String; 2]; 2], EncodeError> {
    if rows.len() < 2 {
        return Err(shape_error(
            "pi_b",
            "array of at least 2 coordinate pairs",
            format!("array of length {}", rows.len()),
        ));
    }

    Ok([g2_row(&rows[0], 0)?, g2_row(&rows[1], 1)?])
}

/// One G2 coordinate pair, components swapped into verifier order.
fn g2_row(row: &Value, index: usize) -> Result<[String; 2], EncodeError> {
    let path = format!("pi_b[{index}]");

    let pair = row.as_array().ok_or_else(|| {
        shape_error(
            &path,
            "array of at least 2 field elements",
            json_kind(row).to_string(),
        )
    })?;

    if pair.len() < 2 {
        return Err(shape_error(
            &path,
            "array of at least 2 field elements",
            format!("array of length {}", pair.len()),
        ));
    }

    Ok([
        leaf_to_hex(&pair[1], &format!("{path}[1]"))?,
        leaf_to_hex(&pair[0], &format!("{path}[0]"))?,
    ])
}

fn shape_error(path: &str, expected: &str, found: String) -> EncodeError {
    EncodeError::MalformedProofShape {
        path: path.to_string(),
        expected: expected.to_string(),
        found,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
