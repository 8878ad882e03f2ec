//! Wallet Record
//!
//! The state a wallet query returns: owner keys, quorum, balance and the
//! history digest. The record's canonical protobuf encoding is the Merkle
//! leaf the proof verifier hashes, so it must reproduce the service's bytes
//! exactly.

use prost::Message;

use crate::keys::{Hash256, PUBLIC_KEY_LEN};
use crate::proto;

/// Wallet state as stored by the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletRecord {
    /// Wallet name, the unique lookup key
    pub name: String,
    /// Owner keys in quorum-signer order
    pub pub_keys: Vec<[u8; PUBLIC_KEY_LEN]>,
    /// Minimum signatures required to authorize spending
    pub quorum: u32,
    /// Current balance
    pub balance: u64,
    /// Number of committed transactions affecting this wallet
    pub history_len: u64,
    /// Digest summarizing the transaction history
    pub history_hash: Hash256,
}

impl WalletRecord {
    /// Canonical encoding of the record, as hashed into the Merkle leaf
    pub fn leaf_bytes(&self) -> Vec<u8> {
        proto::Wallet {
            name: self.name.clone(),
            pub_keys: self
                .pub_keys
                .iter()
                .map(|key| proto::PublicKey { data: key.to_vec() })
                .collect(),
            quorum: self.quorum,
            balance: self.balance,
            history_len: self.history_len,
            history_hash: Some(proto::Hash {
                data: self.history_hash.to_vec(),
            }),
        }
        .encode_to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_leaf_bytes_fixture() {
        let record = WalletRecord {
            name: "John Doe".into(),
            pub_keys: vec![hex!(
                "33ddfc87b274213ab42845d91570af26fb0cf3d28c147d08e44e96501b78cff5"
            )],
            quorum: 1,
            balance: 100,
            history_len: 1,
            history_hash: hex!(
                "f1a4670f1895b803499fff9a6bf707353a373ef08b74e1631bef7f780b0fbd8d"
            ),
        };

        assert_eq!(
            hex::encode(record.leaf_bytes()),
            "0a084a6f686e20446f6512220a2033ddfc87b274213ab42845d91570af26fb0cf3d28c147d08e44e96501b78cff518012064280132220a20f1a4670f1895b803499fff9a6bf707353a373ef08b74e1631bef7f780b0fbd8d"
        );
    }

    #[test]
    fn test_leaf_bytes_deterministic() {
        let record = WalletRecord {
            name: "Alice".into(),
            pub_keys: vec![[1u8; 32], [2u8; 32]],
            quorum: 2,
            balance: 7,
            history_len: 3,
            history_hash: [9u8; 32],
        };

        assert_eq!(record.leaf_bytes(), record.clone().leaf_bytes());
    }
}
