//! Transaction Construction and Signing
//!
//! Builds the three wallet operations, encodes them into the exact byte
//! layout the ledger verifies, and signs them locally. Private keys never
//! leave the client.
//!
//! Wire frame of a signed transaction:
//!
//! ```text
//! author_pub_key(32) || class(1) || type(1) || service_id(2, LE)
//!                    || message_id(2, LE) || protobuf(payload)
//!                    || ed25519_signature(64)
//! ```
//!
//! The signature covers everything before it, and the transaction hash is
//! the SHA-256 of the whole frame. Encoding is deterministic: identical
//! field values always produce identical bytes.

use prost::Message;

use crate::error::Error;
use crate::keys::{sha256, Hash256, KeyPair, PUBLIC_KEY_LEN, SIGNATURE_LEN};
use crate::proto;

/// Service id of the wallet service
pub const SERVICE_ID: u16 = 128;

/// Message id of a transfer transaction
pub const TRANSFER_MESSAGE_ID: u16 = 0;

/// Message id of an issue (add funds) transaction
pub const ISSUE_MESSAGE_ID: u16 = 1;

/// Message id of a create-wallet transaction
pub const CREATE_WALLET_MESSAGE_ID: u16 = 2;

/// Frame marker: transaction message class
const MESSAGE_CLASS: u8 = 0;

/// Frame marker: protobuf payload type
const MESSAGE_TYPE: u8 = 0;

/// Upper bound on an encoded transaction accepted by the network
const MAX_MESSAGE_LEN: usize = 1024 * 1024;

/// A fully encoded and signed transaction, immutable once built.
///
/// The byte buffer is exactly what goes over the wire; the transaction hash
/// is computed from it locally rather than trusted from the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    bytes: Vec<u8>,
}

impl SignedTransaction {
    /// Frame and sign a payload under the wallet service id
    fn seal(keypair: &KeyPair, message_id: u16, payload: &[u8]) -> Result<Self, Error> {
        let unsigned_len = PUBLIC_KEY_LEN + 2 + 2 + 2 + payload.len();
        if unsigned_len + SIGNATURE_LEN > MAX_MESSAGE_LEN {
            return Err(Error::Encoding(format!(
                "encoded transaction of {} bytes exceeds the {} byte limit",
                unsigned_len + SIGNATURE_LEN,
                MAX_MESSAGE_LEN
            )));
        }

        let mut bytes = Vec::with_capacity(unsigned_len + SIGNATURE_LEN);
        bytes.extend_from_slice(&keypair.public_key());
        bytes.push(MESSAGE_CLASS);
        bytes.push(MESSAGE_TYPE);
        bytes.extend_from_slice(&SERVICE_ID.to_le_bytes());
        bytes.extend_from_slice(&message_id.to_le_bytes());
        bytes.extend_from_slice(payload);

        let signature = keypair.sign(&bytes);
        bytes.extend_from_slice(&signature);

        Ok(Self { bytes })
    }

    /// Transaction hash: SHA-256 of the full signed frame
    pub fn hash(&self) -> Hash256 {
        sha256(&self.bytes)
    }

    /// The exact bytes transmitted to the network
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Hex rendering used by the submission endpoint
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

/// Create a wallet with the given name, owner keys and quorum.
///
/// The first key must be the author's; the service rejects the transaction
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWallet {
    /// Name of the new wallet
    pub name: String,
    /// Owner keys, author first; insertion order is quorum-signer order
    pub pub_keys: Vec<[u8; PUBLIC_KEY_LEN]>,
    /// Minimum signatures required to authorize spending
    pub quorum: u32,
}

impl CreateWallet {
    /// Validate, encode and sign
    pub fn sign(&self, keypair: &KeyPair) -> Result<SignedTransaction, Error> {
        self.validate(keypair)?;

        let payload = proto::CreateWallet {
            name: self.name.clone(),
            pub_keys: self
                .pub_keys
                .iter()
                .map(|key| proto::PublicKey { data: key.to_vec() })
                .collect(),
            quorum: self.quorum,
        };

        SignedTransaction::seal(keypair, CREATE_WALLET_MESSAGE_ID, &payload.encode_to_vec())
    }

    fn validate(&self, keypair: &KeyPair) -> Result<(), Error> {
        if self.name.is_empty() {
            return Err(Error::Validation("wallet name must not be empty".into()));
        }
        if self.pub_keys.is_empty() {
            return Err(Error::Validation(
                "wallet must have at least one owner key".into(),
            ));
        }
        if self.pub_keys[0] != keypair.public_key() {
            return Err(Error::Validation(
                "first wallet key must be the author's public key".into(),
            ));
        }
        if self.quorum == 0 || self.quorum as usize > self.pub_keys.len() {
            return Err(Error::Validation(format!(
                "quorum {} must be between 1 and the number of owner keys ({})",
                self.quorum,
                self.pub_keys.len()
            )));
        }
        Ok(())
    }
}

/// Issue funds to the named wallet ("add funds")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Name of the receiving wallet
    pub to: String,
    /// Amount of currency to add
    pub amount: u64,
    /// Replay nonce
    pub seed: u64,
}

impl Issue {
    /// Validate, encode and sign
    pub fn sign(&self, keypair: &KeyPair) -> Result<SignedTransaction, Error> {
        self.validate()?;

        let payload = proto::Issue {
            to: self.to.clone(),
            amount: self.amount,
            seed: self.seed,
        };

        SignedTransaction::seal(keypair, ISSUE_MESSAGE_ID, &payload.encode_to_vec())
    }

    fn validate(&self) -> Result<(), Error> {
        if self.to.is_empty() {
            return Err(Error::Validation("wallet name must not be empty".into()));
        }
        if self.amount == 0 {
            return Err(Error::Validation("amount must be greater than 0".into()));
        }
        Ok(())
    }
}

/// Transfer funds between two named wallets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// Name of the sending wallet
    pub from: String,
    /// Name of the receiving wallet
    pub to: String,
    /// Amount of currency to transfer
    pub amount: u64,
    /// Replay nonce
    pub seed: u64,
}

impl Transfer {
    /// Validate, encode and sign
    pub fn sign(&self, keypair: &KeyPair) -> Result<SignedTransaction, Error> {
        self.validate()?;

        let payload = proto::Transfer {
            from: self.from.clone(),
            to: self.to.clone(),
            amount: self.amount,
            seed: self.seed,
        };

        SignedTransaction::seal(keypair, TRANSFER_MESSAGE_ID, &payload.encode_to_vec())
    }

    fn validate(&self) -> Result<(), Error> {
        if self.from.is_empty() || self.to.is_empty() {
            return Err(Error::Validation("wallet name must not be empty".into()));
        }
        if self.from == self.to {
            return Err(Error::Validation(
                "sender and receiver must be different wallets".into(),
            ));
        }
        if self.amount == 0 {
            return Err(Error::Validation("amount must be greater than 0".into()));
        }
        Ok(())
    }
}

/// Parse a decimal seed string into the wire nonce
pub fn parse_seed(seed: &str) -> Result<u64, Error> {
    seed.parse::<u64>()
        .map_err(|_| Error::Validation(format!("seed {seed:?} is not a decimal u64")))
}
