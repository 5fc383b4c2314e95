// Mesh Address - Raw IPv4 address keying the mesh registry
// Principle: One verifier per IP, so the 4-byte address is the registry key

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw 4-byte IPv4 address used as the registry map key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshAddress([u8; 4]);

impl MeshAddress {
    /// Wire length of a raw address
    pub const LEN: usize = 4;

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        MeshAddress(bytes)
    }

    /// Build from a wire slice; None if the length is wrong
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; 4] = bytes.try_into().ok()?;
        Some(MeshAddress(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn octets(&self) -> [u8; 4] {
        self.0
    }
}

impl fmt::Display for MeshAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

impl From<[u8; 4]> for MeshAddress {
    fn from(bytes: [u8; 4]) -> Self {
        MeshAddress(bytes)
    }
}

impl FromStr for MeshAddress {
    type Err = AddressError;

    /// Parse a dotted-quad address string, e.g. "203.0.113.7"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AddressError::Empty);
        }

        let mut octets = [0u8; 4];
        let mut count = 0;
        for part in s.split('.') {
            if count == 4 {
                return Err(AddressError::WrongSegmentCount);
            }
            octets[count] = part.parse::<u8>().map_err(|_| AddressError::InvalidOctet {
                segment: part.to_string(),
            })?;
            count += 1;
        }
        if count != 4 {
            return Err(AddressError::WrongSegmentCount);
        }

        Ok(MeshAddress(octets))
    }
}

/// Address parse errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Empty address string")]
    Empty,

    #[error("Expected four dot-separated octets")]
    WrongSegmentCount,

    #[error("Invalid octet: {segment}")]
    InvalidOctet { segment: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address_valid() {
        let addr: MeshAddress = "203.0.113.7".parse().unwrap();
        assert_eq!(addr.octets(), [203, 0, 113, 7]);
        assert_eq!(addr.to_string(), "203.0.113.7");
    }

    #[test]
    fn test_parse_address_trims_whitespace() {
        let addr: MeshAddress = "  10.0.0.1 ".parse().unwrap();
        assert_eq!(addr.octets(), [10, 0, 0, 1]);
    }

    #[test]
    fn test_parse_address_invalid_octet() {
        assert!(matches!(
            "256.1.1.1".parse::<MeshAddress>(),
            Err(AddressError::InvalidOctet { .. })
        ));
        assert!(matches!(
            "a.b.c.d".parse::<MeshAddress>(),
            Err(AddressError::InvalidOctet { .. })
        ));
    }

    #[test]
    fn test_parse_address_wrong_segments() {
        assert_eq!(
            "1.2.3".parse::<MeshAddress>(),
            Err(AddressError::WrongSegmentCount)
        );
        assert_eq!(
            "1.2.3.4.5".parse::<MeshAddress>(),
            Err(AddressError::WrongSegmentCount)
        );
        assert_eq!("".parse::<MeshAddress>(), Err(AddressError::Empty));
    }

    #[test]
    fn test_from_slice_lengths() {
        assert!(MeshAddress::from_slice(&[1, 2, 3, 4]).is_some());
        assert!(MeshAddress::from_slice(&[1, 2, 3]).is_none());
        assert!(MeshAddress::from_slice(&[1, 2, 3, 4, 5]).is_none());
    }
}
