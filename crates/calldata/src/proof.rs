//! Groth16 proof artifact data model.
//!
//! Mirrors the JSON documents emitted by the proving toolchain: a proof
//! object with `pi_a`/`pi_b`/`pi_c` curve points and a flat array of public
//! signals. Leaf values stay as raw [`serde_json::Value`]s so that shape and
//! numeric validation happen in the encoder, where errors can name the exact
//! coordinate that failed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Groth16 proof as serialized by the proving toolchain.
///
/// Coordinate layout:
/// - `pi_a`, `pi_c`: G1 points as `[x, y]` (a third homogeneous coordinate,
///   conventionally `"1"`, may be present and is ignored)
/// - `pi_b`: G2 point as `[[x.c0, x.c1], [y.c0, y.c1]]` (an optional third
///   row is ignored)
///
/// Leaves are decimal strings or integers. Extra top-level keys such as
/// `protocol` and `curve` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proof {
    pub pi_a: Vec<Value>,
    pub pi_b: Vec<Value>,
    pub pi_c: Vec<Value>,
}

/// Ordered public inputs of the verifier circuit.
///
/// Order and length are significant and must match the circuit's declared
/// input order exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicSignals(pub Vec<Value>);

impl PublicSignals {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for PublicSignals {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}
