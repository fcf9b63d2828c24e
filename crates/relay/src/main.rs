//! Proof relay binary.
//!
//! Composition root for the calldata pipeline: loads the proof and
//! public-signal documents named by the environment, encodes them into the
//! verifier's `verifyProof(a, b, c, input)` argument tuple, and prints that
//! tuple as JSON on stdout. Logs go to stderr so the calldata stays pipeable
//! into whatever submits the transaction.
//!
//! # Configuration
//!
//! Reads `.env` if present; see [`config::RelayConfig::from_env`] for the
//! recognized variables.

mod config;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::RelayConfig;
use relay_calldata::{encode, load_proof, load_public_signals};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = RelayConfig::from_env();
    if let Some(network) = &config.network {
        tracing::info!("Network: {network}");
    }
    if let Some(address) = &config.verifier_address {
        tracing::info!("Verifier {} at {address}", config.verifier_contract);
    }

    let proof = load_proof(&config.proof_path).context("loading proof document")?;
    let signals =
        load_public_signals(&config.public_signals_path).context("loading public signals")?;
    tracing::info!(
        "Loaded proof from {} with {} public signals",
        config.proof_path.display(),
        signals.len()
    );

    let calldata = encode(&proof, &signals).context("encoding proof calldata")?;

    println!("{}", serde_json::to_string_pretty(&calldata.to_args())?);
    Ok(())
}

/// Log to stderr, leaving stdout to the encoded calldata.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
