//! Relay configuration structures and loaders.

use std::env;
use std::path::PathBuf;

/// Configuration required to locate proof artifacts and the deployed
/// verifier.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    /// Path to the proof document
    pub proof_path: PathBuf,

    /// Path to the public-signals document
    pub public_signals_path: PathBuf,

    /// Name of the compiled verifier contract
    pub verifier_contract: String,

    /// Address of the deployed verifier, once known
    pub verifier_address: Option<String>,

    /// Network name (e.g. "sepolia", "local")
    pub network: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            proof_path: PathBuf::from("proof.json"),
            public_signals_path: PathBuf::from("public.json"),
            verifier_contract: "Groth16Verifier".to_string(),
            verifier_address: None,
            network: None,
        }
    }
}

impl RelayConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PROOF_PATH` - Proof document path (default: proof.json)
    /// - `PUBLIC_SIGNALS_PATH` - Public-signals document path (default: public.json)
    /// - `VERIFIER_CONTRACT` - Verifier contract name (default: Groth16Verifier)
    /// - `VERIFIER_ADDRESS` - Deployed verifier address (optional)
    /// - `RELAY_NETWORK` - Network name (optional)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("PROOF_PATH") {
            config.proof_path = PathBuf::from(path);
        }

        if let Ok(path) = env::var("PUBLIC_SIGNALS_PATH") {
            config.public_signals_path = PathBuf::from(path);
        }

        if let Ok(contract) = env::var("VERIFIER_CONTRACT") {
            config.verifier_contract = contract;
        }

        config.verifier_address = env::var("VERIFIER_ADDRESS").ok();
        config.network = env::var("RELAY_NETWORK").ok();

        config
    }
}
