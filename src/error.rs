//! Error Taxonomy
//!
//! One typed error covers the whole client. The variants keep failure
//! classes distinct so callers can tell a malformed input from a flaky node
//! from a proof that does not check out; in particular a proof failure is
//! never collapsed into a transport error or a silent success.

use thiserror::Error;

use crate::proof::ProofError;

/// Errors surfaced by the light client
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed operation input, rejected before any network call
    #[error("invalid input: {0}")]
    Validation(String),

    /// Codec invariant violated while building a transaction. Indicates a
    /// schema mismatch bug, not a runtime condition worth retrying.
    #[error("transaction encoding failed: {0}")]
    Encoding(String),

    /// Network or endpoint failure; the caller may retry the operation
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The node answered, but the body does not match the expected schema
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The node echoed a transaction hash that differs from the locally
    /// computed one
    #[error("node reported transaction hash {reported}, locally computed {local}")]
    HashMismatch { local: String, reported: String },

    /// Commitment was not observed within the polling budget. Distinct from
    /// rejection: the ledger has no rejection path on this interface.
    #[error("commitment not observed after {attempts} status queries")]
    Timeout { attempts: u32 },

    /// The wallet state query failed Merkle proof verification
    #[error(transparent)]
    Proof(#[from] ProofError),
}
