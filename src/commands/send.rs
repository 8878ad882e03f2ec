//! Transfer funds between wallets

use anyhow::Result;

use wallet_light_client::{generate_seed, LightClient, NodeApi};

use super::load_keypair;

pub async fn run(
    client: &LightClient<NodeApi>,
    secret_key: Option<String>,
    from: &str,
    to: &str,
    amount: u64,
    seed: Option<String>,
) -> Result<()> {
    let keys = load_keypair(secret_key)?;
    let seed = seed.unwrap_or_else(generate_seed);

    let tx_hash = client.transfer(&keys, from, to, amount, &seed).await?;

    println!("Transferred {amount} from {from:?} to {to:?}");
    println!("Transaction: {}", hex::encode(tx_hash));

    Ok(())
}
