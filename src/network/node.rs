// Node Record - A verifier known to the mesh
use crate::network::address::MeshAddress;
use crate::types::{Timestamp, VerifierId};
use serde::{Deserialize, Serialize};

/// A peer of the verifier mesh
///
/// Records are owned by the registry; queries hand out clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Verifier identity announced for this address
    pub identifier: VerifierId,

    /// Raw IPv4 address the verifier announced from
    pub ip_address: MeshAddress,

    /// TCP port, the only field updated in place on re-announcement
    pub port: u16,

    /// Join-queue ordering hint, Unix milliseconds
    pub queue_timestamp: Timestamp,
}

impl Node {
    /// Create a record with the queue timestamp taken from the wall clock
    pub fn new(identifier: VerifierId, ip_address: MeshAddress, port: u16) -> Self {
        Self {
            identifier,
            ip_address,
            port,
            queue_timestamp: chrono::Utc::now().timestamp_millis() as u64,
        }
    }
}
