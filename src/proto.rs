//! Protobuf Wire Messages
//!
//! Payload schemas for the wallet service, mirroring the ledger's protobuf
//! definitions field for field. The encoded bytes are what gets signed and
//! what the service hashes, so tags and field order here are load-bearing:
//! any change silently invalidates every signature downstream.

/// 32-byte Ed25519 public key
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PublicKey {
    #[prost(bytes = "vec", tag = "1")]
    pub data: Vec<u8>,
}

/// 32-byte SHA-256 digest
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Hash {
    #[prost(bytes = "vec", tag = "1")]
    pub data: Vec<u8>,
}

/// Create a wallet with the given name, owner keys and quorum
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateWallet {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "2")]
    pub pub_keys: Vec<PublicKey>,
    #[prost(uint32, tag = "3")]
    pub quorum: u32,
}

/// Issue (add) funds to the named wallet
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Issue {
    #[prost(string, tag = "1")]
    pub to: String,
    #[prost(uint64, tag = "2")]
    pub amount: u64,
    #[prost(uint64, tag = "3")]
    pub seed: u64,
}

/// Transfer funds between two named wallets
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transfer {
    #[prost(string, tag = "1")]
    pub from: String,
    #[prost(string, tag = "2")]
    pub to: String,
    #[prost(uint64, tag = "3")]
    pub amount: u64,
    #[prost(uint64, tag = "4")]
    pub seed: u64,
}

/// Wallet record as stored by the service.
///
/// This is the leaf value under the service's wallet table; its encoding
/// feeds the Merkle leaf digest during proof verification.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Wallet {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "2")]
    pub pub_keys: Vec<PublicKey>,
    #[prost(uint32, tag = "3")]
    pub quorum: u32,
    #[prost(uint64, tag = "4")]
    pub balance: u64,
    #[prost(uint64, tag = "5")]
    pub history_len: u64,
    #[prost(message, optional, tag = "6")]
    pub history_hash: Option<Hash>,
}
