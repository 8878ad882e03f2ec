//! Light Client Facade
//!
//! Composes key management, the transaction codec, the endpoint client and
//! the proof verifier into the four public wallet operations. Constructed
//! once with its transport injected; holds no mutable state, so independent
//! operations for different wallets can run concurrently on clones or shared
//! references.

use std::time::Duration;

use tracing::{debug, info};

use crate::api::{LedgerApi, NodeApi, WalletInfo};
use crate::error::Error;
use crate::keys::{Hash256, KeyPair, PUBLIC_KEY_LEN};
use crate::proof::verify_wallet_proof;
use crate::transactions::{parse_seed, CreateWallet, Issue, SignedTransaction, Transfer};
use crate::wallet::WalletRecord;

/// Default pause between status polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Default polling budget before a submission is reported as timed out
pub const DEFAULT_MAX_ATTEMPTS: u32 = 20;

/// Light client for the wallet service.
///
/// Generic over the transport so tests can drive it with an in-memory
/// ledger; production code uses [`NodeApi`].
pub struct LightClient<A: LedgerApi> {
    api: A,
    poll_interval: Duration,
    max_attempts: u32,
}

impl LightClient<NodeApi> {
    /// Create a client talking to the node at `base_url`
    pub fn connect(base_url: &str) -> Result<Self, Error> {
        Ok(Self::new(NodeApi::new(base_url)?))
    }
}

impl<A: LedgerApi> LightClient<A> {
    /// Create a client over an explicit transport
    pub fn new(api: A) -> Self {
        Self {
            api,
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Override the commitment polling budget
    pub fn with_polling(mut self, interval: Duration, max_attempts: u32) -> Self {
        self.poll_interval = interval;
        self.max_attempts = max_attempts;
        self
    }

    /// Create a wallet owned by the author plus `co_owners`, spendable with
    /// `quorum` signatures. Returns the committed transaction hash.
    pub async fn create_wallet(
        &self,
        keypair: &KeyPair,
        name: &str,
        co_owners: &[[u8; PUBLIC_KEY_LEN]],
        quorum: u32,
    ) -> Result<Hash256, Error> {
        // The service requires the author's key first in the owner list
        let mut pub_keys = vec![keypair.public_key()];
        for key in co_owners {
            if *key != keypair.public_key() {
                pub_keys.push(*key);
            }
        }

        let tx = CreateWallet {
            name: name.to_owned(),
            pub_keys,
            quorum,
        }
        .sign(keypair)?;

        self.submit_and_await(tx).await
    }

    /// Add `amount` of currency to the named wallet. The seed is the
    /// caller-supplied replay nonce, fresh per attempt.
    pub async fn add_funds(
        &self,
        keypair: &KeyPair,
        name: &str,
        amount: u64,
        seed: &str,
    ) -> Result<Hash256, Error> {
        let tx = Issue {
            to: name.to_owned(),
            amount,
            seed: parse_seed(seed)?,
        }
        .sign(keypair)?;

        self.submit_and_await(tx).await
    }

    /// Transfer `amount` from one named wallet to another
    pub async fn transfer(
        &self,
        keypair: &KeyPair,
        sender: &str,
        receiver: &str,
        amount: u64,
        seed: &str,
    ) -> Result<Hash256, Error> {
        let tx = Transfer {
            from: sender.to_owned(),
            to: receiver.to_owned(),
            amount,
            seed: parse_seed(seed)?,
        }
        .sign(keypair)?;

        self.submit_and_await(tx).await
    }

    /// Fetch the named wallet's state and verify it against the current
    /// network configuration. Returns the record only if the proof checks
    /// out against the trusted state root.
    pub async fn get_wallet(&self, name: &str) -> Result<WalletRecord, Error> {
        let config = self.api.actual_config().await?;
        let WalletInfo { wallet, proof } = self.api.wallet_info(name).await?;

        verify_wallet_proof(&wallet, &proof, &config.state_root)?;

        debug!(name, balance = wallet.balance, "wallet proof verified");
        Ok(wallet)
    }

    /// Submit a signed transaction and return its hash.
    ///
    /// The hash is computed locally from the encoded body; a node echoing a
    /// different hash is an integrity error, not something to adopt.
    pub async fn submit(&self, tx: &SignedTransaction) -> Result<Hash256, Error> {
        let local = tx.hash();

        if let Some(reported) = self.api.submit_transaction(&tx.to_hex()).await? {
            if reported != local {
                return Err(Error::HashMismatch {
                    local: hex::encode(local),
                    reported: hex::encode(reported),
                });
            }
        }

        debug!(tx_hash = %hex::encode(local), "transaction submitted");
        Ok(local)
    }

    /// Poll the transaction's status until it commits.
    ///
    /// `unknown` and `in-pool` both mean "not yet": the configured interval
    /// is awaited between attempts, and after `max_attempts` queries without
    /// commitment the result is [`Error::Timeout`]. Dropping the future
    /// cancels polling with no side effects beyond the last issued query.
    pub async fn await_commitment(&self, tx_hash: &Hash256) -> Result<(), Error> {
        for attempt in 1..=self.max_attempts {
            let status = self.api.transaction_status(tx_hash).await?;
            if status.is_committed() {
                info!(tx_hash = %hex::encode(tx_hash), attempt, "transaction committed");
                return Ok(());
            }

            debug!(tx_hash = %hex::encode(tx_hash), attempt, ?status, "not committed yet");
            if attempt < self.max_attempts {
                tokio::time::sleep(self.poll_interval).await;
            }
        }

        Err(Error::Timeout {
            attempts: self.max_attempts,
        })
    }

    async fn submit_and_await(&self, tx: SignedTransaction) -> Result<Hash256, Error> {
        let hash = self.submit(&tx).await?;
        self.await_commitment(&hash).await?;
        Ok(hash)
    }
}
