//! Wallet Light Client CLI
//!
//! Command-line frontend for the light client: generate keys, create
//! wallets, move funds and query verified wallet state.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wallet_light_client::LightClient;

mod commands;

#[derive(Parser)]
#[command(name = "wallet-light-client")]
#[command(about = "Light client for the multisig cryptocurrency wallet service")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the node's public API
    #[arg(short, long, global = true, default_value = "http://127.0.0.1:8200")]
    node: String,

    /// Secret key hex (128 characters); defaults to $WALLET_SECRET_KEY
    #[arg(short, long, global = true, env = "WALLET_SECRET_KEY")]
    secret_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new signing key pair
    Keygen,

    /// Create a new wallet
    CreateWallet {
        /// Name of the wallet
        name: String,

        /// Additional owner public keys (hex), repeatable
        #[arg(long = "co-owner")]
        co_owners: Vec<String>,

        /// Signatures required to authorize spending
        #[arg(long, default_value = "1")]
        quorum: u32,
    },

    /// Add funds to a wallet
    AddFunds {
        /// Name of the wallet
        name: String,

        /// Amount to add
        amount: u64,

        /// Replay nonce; freshly generated when omitted
        #[arg(long)]
        seed: Option<String>,
    },

    /// Transfer funds between wallets
    Transfer {
        /// Name of the sending wallet
        from: String,

        /// Name of the receiving wallet
        to: String,

        /// Amount to transfer
        amount: u64,

        /// Replay nonce; freshly generated when omitted
        #[arg(long)]
        seed: Option<String>,
    },

    /// Show a wallet's verified state
    Show {
        /// Name of the wallet
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Keygen => commands::keygen::run(),
        command => {
            let client = LightClient::connect(&cli.node)?;
            match command {
                Commands::Keygen => unreachable!("handled above"),
                Commands::CreateWallet {
                    name,
                    co_owners,
                    quorum,
                } => {
                    commands::create::run(&client, cli.secret_key, &name, &co_owners, quorum).await
                }
                Commands::AddFunds { name, amount, seed } => {
                    commands::fund::run(&client, cli.secret_key, &name, amount, seed).await
                }
                Commands::Transfer {
                    from,
                    to,
                    amount,
                    seed,
                } => commands::send::run(&client, cli.secret_key, &from, &to, amount, seed).await,
                Commands::Show { name } => commands::show::run(&client, &name).await,
            }
        }
    }
}
