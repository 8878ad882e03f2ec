//! CLI Commands
//!
//! Implementation of the light client CLI commands.

pub mod create;
pub mod fund;
pub mod keygen;
pub mod send;
pub mod show;

use anyhow::{anyhow, Result};

use wallet_light_client::KeyPair;

/// Build the signing key pair from the CLI argument or environment
pub fn load_keypair(secret_key: Option<String>) -> Result<KeyPair> {
    let secret = secret_key.ok_or_else(|| {
        anyhow!("no secret key: pass --secret-key or set WALLET_SECRET_KEY (run `keygen` to create one)")
    })?;

    Ok(KeyPair::from_secret_hex(secret.trim())?)
}

/// Parse a 64-hex-character public key argument
pub fn parse_public_key(value: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(value.trim())
        .map_err(|e| anyhow!("public key {value:?} is not valid hex: {e}"))?;
    bytes
        .try_into()
        .map_err(|_| anyhow!("public key {value:?} is not 32 bytes"))
}
