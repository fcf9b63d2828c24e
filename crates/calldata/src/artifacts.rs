//! Proof artifact loading.
//!
//! Reads the two JSON documents the proving toolchain leaves on disk: the
//! proof object and the public-signals array. Loading is separate from
//! encoding so that file problems and proof problems surface as different
//! errors, each carrying the offending path.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::proof::{Proof, PublicSignals};

/// Errors raised while reading proof artifacts from disk.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a proof document (`proof.json`).
pub fn load_proof(path: impl AsRef<Path>) -> Result<Proof, ArtifactError> {
    load_json(path.as_ref())
}

/// Load a public-signals document (`public.json`).
pub fn load_public_signals(path: impl AsRef<Path>) -> Result<PublicSignals, ArtifactError> {
    load_json(path.as_ref())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ArtifactError::Json {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_proof_and_signals_from_disk() {
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

        let signals_path = dir.path().join("public.json");
        fs::write(&signals_path, r#"["7", "8"]"#).unwrap();

        let proof = load_proof(&proof_path).unwrap();
        let signals = load_public_signals(&signals_path).unwrap();

        assert_eq!(proof.pi_a.len(), 3);
        assert_eq!(signals.len(), 2);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        match load_proof(&missing).unwrap_err() {
            ArtifactError::Io { path, .. } => {
                assert!(path.ends_with("missing.json"), "unexpected path: {path}")
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proof.json");
        fs::write(&path, "not json").unwrap();

        match load_proof(&path).unwrap_err() {
            ArtifactError::Json { path, .. } => {
                assert!(path.ends_with("proof.json"), "unexpected path: {path}")
            }
            other => panic!("expected Json error, got {other:?}"),
        }
    }
}
