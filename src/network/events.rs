// Mesh Events - Best-effort eviction notifications
// Principle: Event delivery never affects registry correctness

use crate::network::address::MeshAddress;
use crate::types::VerifierId;
use std::fmt;
use tokio::sync::broadcast;

/// Default capacity of the eviction event channel
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Eviction events emitted by the mesh registry
#[derive(Debug, Clone)]
pub enum MeshEvent {
    /// A verifier was evicted from the active mesh
    RemovedFromMesh {
        identifier: VerifierId,
        address: MeshAddress,
        /// Whether the record was retained in the inactive map
        retained: bool,
    },

    /// An inactive record was dropped for good during cleanup
    InactiveDropped {
        identifier: VerifierId,
        address: MeshAddress,
    },
}

impl MeshEvent {
    pub fn identifier(&self) -> &VerifierId {
        match self {
            Self::RemovedFromMesh { identifier, .. }
            | Self::InactiveDropped { identifier, .. } => identifier,
        }
    }

    pub fn address(&self) -> &MeshAddress {
        match self {
            Self::RemovedFromMesh { address, .. } | Self::InactiveDropped { address, .. } => {
                address
            }
        }
    }
}

impl fmt::Display for MeshEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::RemovedFromMesh {
                identifier,
                address,
                retained: true,
            } => write!(
                f,
                "removing verifier {} at {} from mesh, record kept inactive",
                identifier, address
            ),
            Self::RemovedFromMesh {
                identifier,
                address,
                retained: false,
            } => write!(f, "removing verifier {} at {} from mesh", identifier, address),
            Self::InactiveDropped {
                identifier,
                address,
            } => write!(f, "dropping inactive verifier {} at {}", identifier, address),
        }
    }
}

/// Non-blocking broadcast emitter. Slow subscribers drop events independently.
#[derive(Debug, Clone)]
pub struct MeshEventEmitter {
    tx: broadcast::Sender<MeshEvent>,
}

impl Default for MeshEventEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl MeshEventEmitter {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emit an event; send failures (no subscribers) are ignored
    pub fn emit(&self, event: MeshEvent) {
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MeshEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
