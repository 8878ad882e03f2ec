//! Show a wallet's verified state

use anyhow::Result;

use wallet_light_client::{LightClient, NodeApi};

pub async fn run(client: &LightClient<NodeApi>, name: &str) -> Result<()> {
    let wallet = client.get_wallet(name).await?;

    println!("Wallet:       {}", wallet.name);
    println!("Balance:      {}", wallet.balance);
    println!("Quorum:       {}", wallet.quorum);
    println!("Owner keys:");
    for key in &wallet.pub_keys {
        println!("  {}", hex::encode(key));
    }
    println!("History:      {} transaction(s)", wallet.history_len);
    println!("History hash: {}", hex::encode(wallet.history_hash));
    println!();
    println!("State verified against the current network configuration.");

    Ok(())
}
