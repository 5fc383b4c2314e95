// Meridian primitives - Core identity and chain types
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verifier identity (public key bytes, opaque to this crate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerifierId([u8; 32]);

impl VerifierId {
    /// Wire length of a verifier identifier
    pub const LEN: usize = 32;

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        VerifierId(bytes)
    }

    /// Build from a wire slice; None if the length is wrong
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; 32] = bytes.try_into().ok()?;
        Some(VerifierId(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for VerifierId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0[..8]))
    }
}

impl From<[u8; 32]> for VerifierId {
    fn from(bytes: [u8; 32]) -> Self {
        VerifierId(bytes)
    }
}

/// Block hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockHash([u8; 32]);

impl BlockHash {
    pub const ZERO: BlockHash = BlockHash([0u8; 32]);

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        BlockHash(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0[..8]))
    }
}

impl From<[u8; 32]> for BlockHash {
    fn from(bytes: [u8; 32]) -> Self {
        BlockHash(bytes)
    }
}

/// Block height (genesis at 0)
pub type BlockHeight = u64;

/// Unix timestamp in milliseconds
pub type Timestamp = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verifier_id_from_slice() {
        assert!(VerifierId::from_slice(&[7u8; 32]).is_some());
        assert!(VerifierId::from_slice(&[7u8; 31]).is_none());
        assert!(VerifierId::from_slice(&[]).is_none());
    }

    #[test]
    fn test_verifier_id_display_prefix() {
        let id = VerifierId::from_bytes([0xab; 32]);
        assert_eq!(id.to_string(), "abababababababab");
    }

    #[test]
    fn test_block_hash_zero() {
        assert_eq!(BlockHash::ZERO.as_bytes(), &[0u8; 32]);
        assert_ne!(BlockHash::from_bytes([1; 32]), BlockHash::ZERO);
    }
}
