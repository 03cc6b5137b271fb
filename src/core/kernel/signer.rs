use crate::core::errors::SdkError;
use crate::core::types::{SignParams, Signature};
use alloy_primitives::{Address, U256};
use secp256k1::ecdsa::RecoverableSignature;
use secp256k1::{Message, PublicKey, SecretKey, SECP256K1};
use sha3::{Digest, Keccak256};
use tracing::trace;
use zeroize::Zeroizing;

/// Offset added to the recovery id (Ethereum convention)
const RECOVERY_ID_OFFSET: i32 = 27;

/// Join parameter values in ascending key order, comma separated.
///
/// Values are written with their plain `Display` form; nothing is quoted or
/// escaped. An empty set yields an empty string.
pub fn canonical_message(params: &SignParams) -> String {
    params
        .iter()
        .map(|(_, value)| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Keccak-256 of the raw UTF-8 bytes (no Ethereum message prefix)
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&hasher.finalize());
    hash
}

/// secp256k1 signer producing `(r, s, v)` triples over canonical messages
#[derive(Clone)]
pub struct EcdsaSigner {
    secret_key: SecretKey,
}

impl std::fmt::Debug for EcdsaSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EcdsaSigner")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

impl EcdsaSigner {
    /// Parse a hex private key, with or without a `0x` prefix
    pub fn from_private_key(private_key: &str) -> Result<Self, SdkError> {
        let key_hex = private_key.strip_prefix("0x").unwrap_or(private_key);

        let key_bytes = Zeroizing::new(
            hex::decode(key_hex)
                .map_err(|e| SdkError::InvalidPrivateKey(format!("invalid hex: {}", e)))?,
        );

        let secret_key = SecretKey::from_slice(&key_bytes)
            .map_err(|e| SdkError::InvalidPrivateKey(e.to_string()))?;

        Ok(Self { secret_key })
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_secret_key(SECP256K1, &self.secret_key)
    }

    /// EIP-55 checksummed address of this key
    pub fn address(&self) -> String {
        public_key_to_address(&self.public_key())
    }

    /// Sign the canonical message of `params`
    pub fn sign(&self, params: &SignParams) -> Result<Signature, SdkError> {
        let message = canonical_message(params);
        trace!(message = %message, "Signing canonical message");

        let recoverable = self.sign_message(&message)?;
        Ok(signature_triple(&recoverable))
    }

    /// Recoverable ECDSA signature over `keccak256(message)`
    pub fn sign_message(&self, message: &str) -> Result<RecoverableSignature, SdkError> {
        let digest = message_digest(message)?;
        Ok(SECP256K1.sign_ecdsa_recoverable(&digest, &self.secret_key))
    }
}

/// Hash a canonical message into a secp256k1 signing digest
pub fn message_digest(message: &str) -> Result<Message, SdkError> {
    let hash = keccak256(message.as_bytes());
    Message::from_digest_slice(&hash)
        .map_err(|e| SdkError::SigningError(format!("Failed to create message: {}", e)))
}

fn signature_triple(signature: &RecoverableSignature) -> Signature {
    let (recovery_id, compact) = signature.serialize_compact();

    Signature {
        r: U256::from_be_slice(&compact[..32]).to_string(),
        s: U256::from_be_slice(&compact[32..]).to_string(),
        v: (recovery_id.to_i32() + RECOVERY_ID_OFFSET).to_string(),
    }
}

fn public_key_to_address(public_key: &PublicKey) -> String {
    let public_key_bytes = public_key.serialize_uncompressed();

    // Drop the 0x04 tag and keep the last 20 bytes of the hash
    let hash = keccak256(&public_key_bytes[1..]);
    Address::from_slice(&hash[12..]).to_checksum(None)
}
