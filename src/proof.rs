//! Merkle Proof Verification
//!
//! Decides whether a queried wallet record is authentic relative to the
//! trusted state root from the network configuration. Stateless and pure: a
//! predicate over (record, proof path, root) with no side effects.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::keys::{hash_pair, sha256, Hash256};
use crate::wallet::WalletRecord;

/// Which side of the running digest a proof sibling sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiblingPosition {
    Left,
    Right,
}

/// One step of a Merkle proof path, bottom-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofEntry {
    /// Side the sibling digest is combined on
    pub position: SiblingPosition,
    /// The sibling digest itself
    pub hash: Hash256,
}

/// Proof verification failure. Always fatal to the query that produced it;
/// the record must be treated as untrusted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProofError {
    #[error("computed root {computed} does not match trusted root {expected}")]
    RootMismatch { computed: String, expected: String },
}

/// Verify a wallet record against a proof path and a trusted root.
///
/// The leaf digest is the SHA-256 of the record's canonical encoding. Each
/// path entry combines the running digest with its sibling in the supplied
/// order: a `left` sibling gives `H(sibling || acc)`, a `right` sibling
/// `H(acc || sibling)`. The fold must land exactly on the trusted root.
pub fn verify_wallet_proof(
    wallet: &WalletRecord,
    proof: &[ProofEntry],
    trusted_root: &Hash256,
) -> Result<(), ProofError> {
    let mut acc = sha256(&wallet.leaf_bytes());

    for entry in proof {
        acc = match entry.position {
            SiblingPosition::Left => hash_pair(&entry.hash, &acc),
            SiblingPosition::Right => hash_pair(&acc, &entry.hash),
        };
    }

    if acc == *trusted_root {
        Ok(())
    } else {
        Err(ProofError::RootMismatch {
            computed: hex::encode(acc),
            expected: hex::encode(trusted_root),
        })
    }
}
