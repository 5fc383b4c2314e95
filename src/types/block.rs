// Block view - Minimal block representation carried in join responses
// Principle: Full block structure and validation rules live with the chain layer

use crate::types::primitives::{BlockHash, BlockHeight, Timestamp, VerifierId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Verifier signature over a block (64 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifierSignature(pub [u8; 64]);

impl VerifierSignature {
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    pub fn zero() -> Self {
        Self([0; 64])
    }
}

impl From<[u8; 64]> for VerifierSignature {
    fn from(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for VerifierSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Manual serialization: serde has no derive for 64-byte arrays
impl Serialize for VerifierSignature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.0)
    }
}

impl<'de> Deserialize<'de> for VerifierSignature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = <Vec<u8>>::deserialize(deserializer)?;
        if bytes.len() != 64 {
            return Err(serde::de::Error::custom("Signature must be 64 bytes"));
        }
        let mut arr = [0u8; 64];
        arr.copy_from_slice(&bytes);
        Ok(VerifierSignature(arr))
    }
}

/// Block as carried in a node join response
///
/// Only the fields this crate inspects or forwards. Whether a candidate is a
/// legitimate genesis block is decided by the chain layer behind the
/// GenesisValidator trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Height in the chain (genesis at 0)
    pub height: BlockHeight,

    /// Hash of the previous block (zero for genesis)
    pub previous_hash: BlockHash,

    /// Start of the block's verification window, Unix milliseconds
    pub start_timestamp: Timestamp,

    /// Identifier of the verifier that produced the block
    pub verifier: VerifierId,

    /// Signature by the producing verifier
    pub signature: VerifierSignature,
}
