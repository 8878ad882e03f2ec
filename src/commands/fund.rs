//! Add funds to a wallet

use anyhow::Result;

use wallet_light_client::{generate_seed, LightClient, NodeApi};

use super::load_keypair;

pub async fn run(
    client: &LightClient<NodeApi>,
    secret_key: Option<String>,
    name: &str,
    amount: u64,
    seed: Option<String>,
) -> Result<()> {
    let keys = load_keypair(secret_key)?;
    let seed = seed.unwrap_or_else(generate_seed);

    let tx_hash = client.add_funds(&keys, name, amount, &seed).await?;

    println!("Added {amount} to {name:?}");
    println!("Transaction: {}", hex::encode(tx_hash));

    Ok(())
}
