//! Key Management and Hashing
//!
//! Ed25519 signing key pairs for wallet operations, plus the SHA-256
//! primitives the transaction codec and proof verifier are built on.
//!
//! Security: private keys are generated from OS entropy and never leave the
//! process. Signing happens locally; only public keys and signatures go over
//! the wire.

use ed25519_dalek::{Signer, SigningKey};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

use crate::error::Error;

/// 32-byte SHA-256 digest
pub type Hash256 = [u8; 32];

/// Length of an Ed25519 public key in bytes
pub const PUBLIC_KEY_LEN: usize = 32;

/// Length of an Ed25519 signature in bytes
pub const SIGNATURE_LEN: usize = 64;

/// Length of the hex rendering of a secret key (seed || public key)
pub const SECRET_KEY_HEX_LEN: usize = 128;

/// Compute the SHA-256 digest of a byte string
pub fn sha256(data: &[u8]) -> Hash256 {
    Sha256::digest(data).into()
}

/// Combine two Merkle child digests into their parent digest.
///
/// Always `SHA-256(left || right)`. Callers are responsible for putting the
/// siblings in the order the tree dictates; swapping them yields a different
/// parent.
pub fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// An Ed25519 signing key pair.
///
/// The secret key renders as 128 hex characters: the 32-byte private seed
/// followed by the 32-byte public key, so the trailing 64 hex characters of
/// the secret always equal the public key hex. Immutable once created.
#[derive(Clone)]
pub struct KeyPair {
    signing: SigningKey,
}

impl KeyPair {
    /// Generate a fresh key pair from OS entropy
    pub fn generate() -> Self {
        Self {
            signing: SigningKey::generate(&mut OsRng),
        }
    }

    /// Restore a key pair from its 128-hex-character secret key.
    ///
    /// The public key embedded in the trailing half must match the key
    /// derived from the seed, otherwise the material is rejected.
    pub fn from_secret_hex(secret_hex: &str) -> Result<Self, Error> {
        if secret_hex.len() != SECRET_KEY_HEX_LEN {
            return Err(Error::Validation(format!(
                "secret key must be {} hex characters, got {}",
                SECRET_KEY_HEX_LEN,
                secret_hex.len()
            )));
        }

        let bytes = hex::decode(secret_hex)
            .map_err(|e| Error::Validation(format!("secret key is not valid hex: {e}")))?;

        let seed: [u8; 32] = bytes[..32]
            .try_into()
            .map_err(|_| Error::Validation("secret key seed is not 32 bytes".into()))?;
        let signing = SigningKey::from_bytes(&seed);

        if signing.verifying_key().to_bytes()[..] != bytes[32..] {
            return Err(Error::Validation(
                "secret key suffix does not match the derived public key".into(),
            ));
        }

        Ok(Self { signing })
    }

    /// Get the public key bytes
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.signing.verifying_key().to_bytes()
    }

    /// Get the public key as 64 hex characters
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key())
    }

    /// Get the secret key as 128 hex characters (seed || public key)
    pub fn secret_key_hex(&self) -> String {
        let mut out = hex::encode(self.signing.to_bytes());
        out.push_str(&self.public_key_hex());
        out
    }

    /// Sign a message with the secret key.
    ///
    /// Ed25519 signing is deterministic: the same key and message always
    /// produce the same 64-byte signature.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LEN] {
        self.signing.sign(message).to_bytes()
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never format the secret half
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key_hex())
            .finish()
    }
}

/// Generate a per-transaction replay nonce.
///
/// A random u64 rendered as a decimal string. Uniqueness is advisory, not
/// guaranteed; the nonce only has to make identical retried operations encode
/// to distinct bytes.
pub fn generate_seed() -> String {
    OsRng.next_u64().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const TEST_SECRET: &str = "888398232761ee1cf5bdff3bf306d9951d7b3f535f2d78edff4fb7d4e8a78e2833ddfc87b274213ab42845d91570af26fb0cf3d28c147d08e44e96501b78cff5";
    const TEST_PUBLIC: &str = "33ddfc87b274213ab42845d91570af26fb0cf3d28c147d08e44e96501b78cff5";

    #[test]
    fn test_generate_key_shapes() {
        let keys = KeyPair::generate();

        let public = keys.public_key_hex();
        let secret = keys.secret_key_hex();

        assert_eq!(public.len(), 64);
        assert_eq!(secret.len(), SECRET_KEY_HEX_LEN);
        assert!(public.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));

        // The trailing half of the secret is the public key
        assert_eq!(&secret[64..], public);
    }

    #[test]
    fn test_restore_from_secret_hex() {
        let keys = KeyPair::from_secret_hex(TEST_SECRET).unwrap();

        assert_eq!(keys.public_key_hex(), TEST_PUBLIC);
        assert_eq!(keys.secret_key_hex(), TEST_SECRET);
    }

    #[test]
    fn test_restore_rejects_bad_material() {
        // Wrong length
        assert!(KeyPair::from_secret_hex("abcd").is_err());

        // Not hex
        let bad = "zz".repeat(64);
        assert!(KeyPair::from_secret_hex(&bad).is_err());

        // Public-key suffix that does not match the seed
        let mut mismatched = TEST_SECRET.to_string();
        mismatched.replace_range(64..66, "00");
        assert!(KeyPair::from_secret_hex(&mismatched).is_err());
    }

    #[test]
    fn test_sign_is_deterministic() {
        let keys = KeyPair::from_secret_hex(TEST_SECRET).unwrap();

        let sig1 = keys.sign(b"message");
        let sig2 = keys.sign(b"message");

        assert_eq!(sig1.len(), SIGNATURE_LEN);
        assert_eq!(sig1, sig2);
        assert_ne!(sig1, keys.sign(b"other message"));
    }

    #[test]
    fn test_generate_seed_is_decimal() {
        let seed = generate_seed();

        assert!(!seed.is_empty());
        assert!(seed.chars().all(|c| c.is_ascii_digit()));
        seed.parse::<u64>().unwrap();
    }

    #[test]
    fn test_sha256_vector() {
        // FIPS 180-2 test vector for "abc"
        assert_eq!(
            sha256(b"abc"),
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn test_hash_pair_order_matters() {
        let a = sha256(b"a");
        let b = sha256(b"b");

        assert_ne!(hash_pair(&a, &b), hash_pair(&b, &a));

        // hash_pair is plain concatenation under SHA-256
        let mut concat = Vec::new();
        concat.extend_from_slice(&a);
        concat.extend_from_slice(&b);
        assert_eq!(hash_pair(&a, &b), sha256(&concat));
    }
}
