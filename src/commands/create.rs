//! Create a new wallet

use anyhow::Result;

use wallet_light_client::{LightClient, NodeApi};

use super::{load_keypair, parse_public_key};

pub async fn run(
    client: &LightClient<NodeApi>,
    secret_key: Option<String>,
    name: &str,
    co_owners: &[String],
    quorum: u32,
) -> Result<()> {
    let keys = load_keypair(secret_key)?;

    let co_owner_keys = co_owners
        .iter()
        .map(|key| parse_public_key(key))
        .collect::<Result<Vec<_>>>()?;

    let tx_hash = client
        .create_wallet(&keys, name, &co_owner_keys, quorum)
        .await?;

    println!("Wallet {name:?} created");
    println!("Transaction: {}", hex::encode(tx_hash));

    Ok(())
}
