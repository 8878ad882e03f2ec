//! Generate a fresh signing key pair

use anyhow::Result;

use wallet_light_client::KeyPair;

pub fn run() -> Result<()> {
    let keys = KeyPair::generate();

    println!("Public key: {}", keys.public_key_hex());
    println!("Secret key: {}", keys.secret_key_hex());
    println!();
    println!("Keep the secret key safe; it cannot be recovered.");
    println!("Export it for the other commands:");
    println!("  export WALLET_SECRET_KEY={}", keys.secret_key_hex());

    Ok(())
}
