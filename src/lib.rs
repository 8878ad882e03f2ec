//! Wallet Light Client
//!
//! A light client for a replicated ledger running a multisig cryptocurrency
//! wallet service. It signs transactions locally and verifies queried wallet
//! state with Merkle proofs instead of replicating the ledger.
//!
//! ## Security Model
//!
//! - Private keys never leave the client; all signing is local
//! - The node is untrusted: transaction hashes are computed locally, and
//!   every wallet query must prove its result against the trusted state root
//!   from the network configuration
//! - The configuration itself is trusted input fetched out-of-band

pub mod api;
pub mod client;
pub mod error;
pub mod keys;
pub mod proof;
pub mod proto;
pub mod transactions;
pub mod wallet;

pub use api::{LedgerApi, NetworkConfig, NodeApi, TransactionStatus, WalletInfo};
pub use client::LightClient;
pub use error::Error;
pub use keys::{generate_seed, Hash256, KeyPair};
pub use proof::{verify_wallet_proof, ProofEntry, ProofError, SiblingPosition};
pub use transactions::{CreateWallet, Issue, SignedTransaction, Transfer};
pub use wallet::WalletRecord;
