//! Typed HTTP Endpoint Client
//!
//! Thin wrapper over the node's public REST endpoints. Every response is
//! deserialized into a strict schema struct at this boundary; missing or
//! malformed fields are rejected here instead of leaking partial values into
//! the client logic. Hex fields are decoded into fixed-width byte arrays
//! before anything downstream sees them.

use std::time::Duration;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;
use crate::keys::{Hash256, PUBLIC_KEY_LEN};
use crate::proof::{ProofEntry, SiblingPosition};
use crate::wallet::WalletRecord;

/// Timeout for a single HTTP request
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Transaction submission and status endpoint
pub const TRANSACTIONS_PATH: &str = "/api/explorer/v1/transactions";

/// Currently accepted network configuration
pub const CONFIG_PATH: &str = "/api/services/configuration/v1/configs/actual";

/// Wallet state with Merkle proof, keyed by wallet name
pub const WALLET_INFO_PATH: &str = "/api/services/cryptocurrency/v1/wallets/info";

/// Observed status of a submitted transaction.
///
/// `Unknown` and `InPool` are both non-terminal; the ledger never reports
/// permanent rejection through this interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    /// The node does not know the transaction (yet)
    Unknown,
    /// Accepted into the pool, not yet committed
    InPool,
    /// Durably part of the ledger history
    Committed,
}

impl TransactionStatus {
    /// Whether polling can stop
    pub fn is_committed(&self) -> bool {
        matches!(self, TransactionStatus::Committed)
    }
}

/// Trusted network configuration, fetched out-of-band of any single query.
///
/// Treated as the root of trust for proof verification; its own provenance
/// chain is not validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Validator public keys of the current configuration
    pub validator_keys: Vec<[u8; PUBLIC_KEY_LEN]>,
    /// Root commitment of the wallet service state
    pub state_root: Hash256,
}

/// A wallet state query result: the record plus its proof path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletInfo {
    pub wallet: WalletRecord,
    pub proof: Vec<ProofEntry>,
}

/// Interface to the ledger's public endpoints.
///
/// Seam between the light client logic and the HTTP transport; tests supply
/// an in-memory implementation with scripted responses.
#[allow(async_fn_in_trait)]
pub trait LedgerApi {
    /// Submit a signed transaction body (hex-wrapped). Returns the hash the
    /// node echoed, if it echoed one; 2xx only means accepted into the pool.
    async fn submit_transaction(&self, tx_body_hex: &str) -> Result<Option<Hash256>, Error>;

    /// Query the current status of a transaction by hash
    async fn transaction_status(&self, tx_hash: &Hash256) -> Result<TransactionStatus, Error>;

    /// Fetch the currently accepted network configuration
    async fn actual_config(&self) -> Result<NetworkConfig, Error>;

    /// Fetch a wallet record and its Merkle proof by name
    async fn wallet_info(&self, name: &str) -> Result<WalletInfo, Error>;
}

// Request/response schemas

#[derive(Debug, Serialize)]
struct SubmitRequest<'a> {
    tx_body: &'a str,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    tx_hash: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConfigResponse {
    config: ConfigJson,
}

#[derive(Debug, Deserialize)]
struct ConfigJson {
    validator_keys: Vec<String>,
    state_root: String,
}

#[derive(Debug, Deserialize)]
struct WalletInfoResponse {
    wallet: WalletJson,
    proof: Vec<ProofEntryJson>,
}

#[derive(Debug, Deserialize)]
struct WalletJson {
    name: String,
    pub_keys: Vec<String>,
    quorum: u32,
    balance: u64,
    history_len: u64,
    history_hash: String,
}

#[derive(Debug, Deserialize)]
struct ProofEntryJson {
    position: SiblingPosition,
    hash: String,
}

/// Decode a 32-byte hex field, naming the field in the error
fn decode_hash32(field: &str, value: &str) -> Result<Hash256, Error> {
    let bytes = hex::decode(value)
        .map_err(|e| Error::MalformedResponse(format!("{field} is not valid hex: {e}")))?;
    bytes.try_into().map_err(|_| {
        Error::MalformedResponse(format!("{field} is not 32 bytes: {value:?}"))
    })
}

impl TryFrom<ConfigJson> for NetworkConfig {
    type Error = Error;

    fn try_from(json: ConfigJson) -> Result<Self, Error> {
        let validator_keys = json
            .validator_keys
            .iter()
            .map(|key| decode_hash32("config.validator_keys", key))
            .collect::<Result<_, _>>()?;

        Ok(NetworkConfig {
            validator_keys,
            state_root: decode_hash32("config.state_root", &json.state_root)?,
        })
    }
}

impl TryFrom<WalletInfoResponse> for WalletInfo {
    type Error = Error;

    fn try_from(json: WalletInfoResponse) -> Result<Self, Error> {
        let pub_keys = json
            .wallet
            .pub_keys
            .iter()
            .map(|key| decode_hash32("wallet.pub_keys", key))
            .collect::<Result<_, _>>()?;

        let wallet = WalletRecord {
            name: json.wallet.name,
            pub_keys,
            quorum: json.wallet.quorum,
            balance: json.wallet.balance,
            history_len: json.wallet.history_len,
            history_hash: decode_hash32("wallet.history_hash", &json.wallet.history_hash)?,
        };

        let proof = json
            .proof
            .into_iter()
            .map(|entry| {
                Ok(ProofEntry {
                    position: entry.position,
                    hash: decode_hash32("proof.hash", &entry.hash)?,
                })
            })
            .collect::<Result<_, Error>>()?;

        Ok(WalletInfo { wallet, proof })
    }
}

/// HTTP client for a single node's public API
pub struct NodeApi {
    client: reqwest::Client,
    base_url: String,
}

impl NodeApi {
    /// Create a client for the node at `base_url`
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Send a prepared request and deserialize the body strictly
    async fn fetch<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, Error> {
        let response = request.send().await?.error_for_status()?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            Error::MalformedResponse(format!("response does not match schema: {e}"))
        })
    }
}

impl LedgerApi for NodeApi {
    async fn submit_transaction(&self, tx_body_hex: &str) -> Result<Option<Hash256>, Error> {
        let url = format!("{}{}", self.base_url, TRANSACTIONS_PATH);
        debug!(url, len = tx_body_hex.len(), "submitting transaction");

        let response = self
            .client
            .post(&url)
            .json(&SubmitRequest {
                tx_body: tx_body_hex,
            })
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let parsed: SubmitResponse = serde_json::from_str(&body).map_err(|e| {
            Error::MalformedResponse(format!("submit response does not match schema: {e}"))
        })?;

        parsed
            .tx_hash
            .map(|hash| decode_hash32("tx_hash", &hash))
            .transpose()
    }

    async fn transaction_status(&self, tx_hash: &Hash256) -> Result<TransactionStatus, Error> {
        let url = format!("{}{}", self.base_url, TRANSACTIONS_PATH);
        let request = self.client.get(&url).query(&[("hash", hex::encode(tx_hash))]);

        let response: StatusResponse = self.fetch(request).await?;
        let status = match response.kind.as_deref() {
            Some("committed") => TransactionStatus::Committed,
            Some("in-pool") => TransactionStatus::InPool,
            _ => TransactionStatus::Unknown,
        };

        debug!(tx_hash = %hex::encode(tx_hash), ?status, "transaction status");
        Ok(status)
    }

    async fn actual_config(&self) -> Result<NetworkConfig, Error> {
        let url = format!("{}{}", self.base_url, CONFIG_PATH);
        let response: ConfigResponse = self.fetch(self.client.get(&url)).await?;

        response.config.try_into()
    }

    async fn wallet_info(&self, name: &str) -> Result<WalletInfo, Error> {
        let url = format!("{}{}", self.base_url, WALLET_INFO_PATH);
        let request = self.client.get(&url).query(&[("name", name)]);

        let response: WalletInfoResponse = self.fetch(request).await?;
        response.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_status_response_parsing() {
        let cases = [
            (r#"{"type": "committed"}"#, Some("committed")),
            (r#"{"type": "in-pool"}"#, Some("in-pool")),
            (r#"{"type": "unknown"}"#, Some("unknown")),
            (r#"{}"#, None),
        ];

        for (body, expected) in cases {
            let parsed: StatusResponse = serde_json::from_str(body).unwrap();
            assert_eq!(parsed.kind.as_deref(), expected);
        }
    }

    #[test]
    fn test_config_parsing() {
        let body = r#"{
            "config": {
                "validator_keys": [
                    "33ddfc87b274213ab42845d91570af26fb0cf3d28c147d08e44e96501b78cff5"
                ],
                "state_root": "fa780d18ae67f0ae5eacf4127ea67c74ba553f0f6337d0dfb7fbdae518c0a497"
            }
        }"#;

        let parsed: ConfigResponse = serde_json::from_str(body).unwrap();
        let config: NetworkConfig = parsed.config.try_into().unwrap();

        assert_eq!(config.validator_keys.len(), 1);
        assert_eq!(
            config.state_root,
            hex!("fa780d18ae67f0ae5eacf4127ea67c74ba553f0f6337d0dfb7fbdae518c0a497")
        );
    }

    #[test]
    fn test_config_rejects_missing_fields() {
        let body = r#"{"config": {"validator_keys": []}}"#;
        assert!(serde_json::from_str::<ConfigResponse>(body).is_err());
    }

    #[test]
    fn test_wallet_info_parsing() {
        let body = r#"{
            "wallet": {
                "name": "John Doe",
                "pub_keys": [
                    "33ddfc87b274213ab42845d91570af26fb0cf3d28c147d08e44e96501b78cff5"
                ],
                "quorum": 1,
                "balance": 100,
                "history_len": 1,
                "history_hash": "f1a4670f1895b803499fff9a6bf707353a373ef08b74e1631bef7f780b0fbd8d"
            },
            "proof": [
                {
                    "position": "right",
                    "hash": "b693721234483b94325e74a1d0843884e9a5464c6fecf30a684277bffb58a2b4"
                }
            ]
        }"#;

        let parsed: WalletInfoResponse = serde_json::from_str(body).unwrap();
        let info: WalletInfo = parsed.try_into().unwrap();

        assert_eq!(info.wallet.name, "John Doe");
        assert_eq!(info.wallet.balance, 100);
        assert_eq!(info.proof.len(), 1);
        assert_eq!(info.proof[0].position, SiblingPosition::Right);
    }

    #[test]
    fn test_wallet_info_rejects_bad_hex() {
        let json = WalletInfoResponse {
            wallet: WalletJson {
                name: "W".into(),
                pub_keys: vec!["nothex".into()],
                quorum: 1,
                balance: 0,
                history_len: 0,
                history_hash: "00".repeat(32),
            },
            proof: vec![],
        };

        let result: Result<WalletInfo, _> = json.try_into();
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_decode_hash32_length_check() {
        assert!(decode_hash32("f", &"00".repeat(32)).is_ok());
        assert!(decode_hash32("f", &"00".repeat(31)).is_err());
        assert!(decode_hash32("f", "zz").is_err());
    }
}
