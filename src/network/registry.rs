// Mesh Registry - Active and inactive verifier maps with failure-based eviction
// Principle: One verifier per IP; an occupied address only changes hands when
// its verifier has been absent from the two most recent cycles

use crate::consensus::cycle::SharedCycleProvider;
use crate::network::address::MeshAddress;
use crate::network::events::{MeshEvent, MeshEventEmitter};
use crate::network::node::Node;
use crate::types::VerifierId;
use parking_lot::Mutex;
use std::collections::HashMap;
use tokio::sync::broadcast;
use tracing::{debug, info};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Mesh registry configuration
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Consecutive connection failures before an address is evicted
    pub consecutive_failures_before_removal: u32,

    /// Capacity of the eviction event channel
    pub event_channel_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            consecutive_failures_before_removal: 6,
            event_channel_capacity: crate::network::events::DEFAULT_EVENT_CAPACITY,
        }
    }
}

// =============================================================================
// UPDATE OUTCOME
// =============================================================================

/// Result of a node announcement
///
/// Informational only: rejected announcements are externally silent no-ops,
/// and callers are free to discard this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// First record at a previously unoccupied address
    Added,

    /// Same verifier re-announced; only the port was refreshed
    Refreshed,

    /// A different verifier legitimately took over the address
    Replaced { previous: VerifierId },

    /// Identifier or address bytes had the wrong length
    RejectedMalformed,

    /// The address is held by a verifier seen in the two most recent cycles
    RejectedOccupied,
}

impl UpdateOutcome {
    /// True when the announcement created or changed a record
    pub fn accepted(&self) -> bool {
        matches!(self, Self::Added | Self::Refreshed | Self::Replaced { .. })
    }
}

// =============================================================================
// MESH REGISTRY
// =============================================================================

/// The three maps the registry guards together
#[derive(Debug, Default)]
struct MeshState {
    /// Addresses currently part of the live mesh
    active: HashMap<MeshAddress, Node>,

    /// Addresses withheld from the mesh while their last occupant is still a
    /// recent verifier; exists to block spoofing reuse of the address
    inactive: HashMap<MeshAddress, Node>,

    /// Open streaks of consecutive connection failures
    failure_counts: HashMap<MeshAddress, u32>,
}

/// Registry of mesh peers for a verifier node
pub struct MeshRegistry {
    /// Single lock over all three maps. The no-duplicate-address invariant
    /// spans active and inactive, so the maps are never locked independently.
    state: Mutex<MeshState>,

    /// Cycle membership oracle. Must be a fast local query: it is consulted
    /// with the registry lock held.
    cycles: SharedCycleProvider,

    /// Best-effort eviction event sink
    events: MeshEventEmitter,

    config: RegistryConfig,
}

impl MeshRegistry {
    pub fn new(config: RegistryConfig, cycles: SharedCycleProvider) -> Self {
        let events = MeshEventEmitter::new(config.event_channel_capacity);
        Self::with_emitter(config, cycles, events)
    }

    /// Create a registry emitting into an existing event channel
    pub fn with_emitter(
        config: RegistryConfig,
        cycles: SharedCycleProvider,
        events: MeshEventEmitter,
    ) -> Self {
        Self {
            state: Mutex::new(MeshState::default()),
            cycles,
            events,
            config,
        }
    }

    /// Record an announced peer; the queue timestamp comes from the wall clock
    pub fn update_node(&self, identifier: &[u8], ip_address: &[u8], port: u16) -> UpdateOutcome {
        self.update_node_with_timestamp(identifier, ip_address, port, 0)
    }

    /// Record an announced peer carrying an authoritative queue timestamp
    /// (a value of 0 means none was supplied)
    pub fn update_node_with_timestamp(
        &self,
        identifier: &[u8],
        ip_address: &[u8],
        port: u16,
        queue_timestamp: u64,
    ) -> UpdateOutcome {
        let (identifier, address) = match (
            VerifierId::from_slice(identifier),
            MeshAddress::from_slice(ip_address),
        ) {
            (Some(identifier), Some(address)) => (identifier, address),
            _ => {
                debug!("ignoring announcement with malformed identifier or address");
                return UpdateOutcome::RejectedMalformed;
            }
        };

        debug!("adding node {}, {}", identifier, address);

        let mut state = self.state.lock();

        // Promote a displaced record first so the takeover check below runs
        // against the address's rightful occupant.
        if !state.active.contains_key(&address) {
            if let Some(node) = state.inactive.remove(&address) {
                debug!(
                    "moved verifier {} at {} from inactive to active",
                    node.identifier, address
                );
                state.active.insert(address, node);
            }
        }

        let occupant = state.active.get(&address).map(|node| node.identifier);
        match occupant {
            None => {
                // Simple case: the address is unoccupied.
                let node = node_for_announcement(identifier, address, port, queue_timestamp);
                state.active.insert(address, node);
                UpdateOutcome::Added
            }
            Some(existing) if existing == identifier => {
                // Re-announcement from the same verifier: refresh the port only.
                if let Some(node) = state.active.get_mut(&address) {
                    node.port = port;
                }
                UpdateOutcome::Refreshed
            }
            Some(previous) => {
                // A different verifier wants this address. Authorized only if
                // the occupant did not verify in the previous two cycles.
                if self.cycles.verifier_in_recent_cycles(&previous) {
                    debug!("rejecting takeover of {} by {}", address, identifier);
                    UpdateOutcome::RejectedOccupied
                } else {
                    let node = node_for_announcement(identifier, address, port, queue_timestamp);
                    state.active.insert(address, node);
                    UpdateOutcome::Replaced { previous }
                }
            }
        }
    }

    /// Snapshot of the active mesh
    pub fn get_mesh(&self) -> Vec<Node> {
        self.state.lock().active.values().cloned().collect()
    }

    /// True once the active map holds more than one entry. Requesting a node
    /// list from a peer makes that peer add the requester to its own map, so
    /// a proper mesh always yields at least two entries.
    pub fn connected_to_mesh(&self) -> bool {
        self.state.lock().active.len() > 1
    }

    /// Identifier currently announced at the address; the inactive map is
    /// intentionally invisible to this lookup
    pub fn identifier_for_address(&self, address_string: &str) -> Option<VerifierId> {
        let address: MeshAddress = address_string.parse().ok()?;
        self.state
            .lock()
            .active
            .get(&address)
            .map(|node| node.identifier)
    }

    /// Record a failed connection attempt against the address
    ///
    /// Reaching the configured streak clears the counter and evicts the
    /// address from the active mesh.
    pub fn mark_failed_connection(&self, address_string: &str) {
        let address: MeshAddress = match address_string.parse() {
            Ok(address) => address,
            Err(error) => {
                debug!("ignoring failed connection for unparseable address: {}", error);
                return;
            }
        };

        let mut state = self.state.lock();
        let count = state.failure_counts.get(&address).copied().unwrap_or(0) + 1;
        if count < self.config.consecutive_failures_before_removal {
            state.failure_counts.insert(address, count);
        } else {
            state.failure_counts.remove(&address);
            self.remove_from_mesh(&mut state, address);
        }
    }

    /// Record a successful connection, clearing any failure streak
    pub fn mark_successful_connection(&self, address_string: &str) {
        let address: MeshAddress = match address_string.parse() {
            Ok(address) => address,
            Err(error) => {
                debug!("ignoring successful connection for unparseable address: {}", error);
                return;
            }
        };

        self.state.lock().failure_counts.remove(&address);
    }

    /// Number of records withheld in the inactive map (diagnostics)
    pub fn inactive_node_count(&self) -> usize {
        self.state.lock().inactive.len()
    }

    /// Addresses currently withheld in the inactive map
    #[cfg(test)]
    pub(crate) fn inactive_addresses(&self) -> Vec<MeshAddress> {
        self.state.lock().inactive.keys().copied().collect()
    }

    /// Subscribe to eviction events
    pub fn subscribe(&self) -> broadcast::Receiver<MeshEvent> {
        self.events.subscribe()
    }

    /// Evict an address from the active map, then sweep the inactive map.
    /// Runs with the registry lock already held.
    fn remove_from_mesh(&self, state: &mut MeshState, address: MeshAddress) {
        match state.active.remove(&address) {
            Some(node) => {
                // A verifier seen in the past two cycles keeps a record in the
                // inactive map so nobody else can claim its address while it
                // is still live in consensus.
                let retained = self.cycles.verifier_in_recent_cycles(&node.identifier);
                info!("removing verifier {} at {} from mesh", node.identifier, address);
                self.events.emit(MeshEvent::RemovedFromMesh {
                    identifier: node.identifier,
                    address,
                    retained,
                });

                if retained {
                    state.inactive.insert(address, node);
                } else {
                    debug!("not retaining {}: not a recent verifier", node.identifier);
                }

                self.clean_inactive(state);
            }
            None => {
                debug!("no active node at {} to remove", address);
            }
        }
    }

    /// Drop inactive records whose verifiers have left the recent cycles.
    /// Sole destruction path for inactive entries; runs after every removal
    /// to keep the inactive map bounded.
    fn clean_inactive(&self, state: &mut MeshState) {
        let stale: Vec<MeshAddress> = state
            .inactive
            .iter()
            .filter(|(_, node)| !self.cycles.verifier_in_recent_cycles(&node.identifier))
            .map(|(address, _)| *address)
            .collect();

        for address in stale {
            if let Some(node) = state.inactive.remove(&address) {
                debug!("removed inactive verifier {} in cleanup", node.identifier);
                self.events.emit(MeshEvent::InactiveDropped {
                    identifier: node.identifier,
                    address,
                });
            }
        }
    }
}

/// Build the record for an announcement, honoring a caller-supplied queue
/// timestamp when one was given
fn node_for_announcement(
    identifier: VerifierId,
    address: MeshAddress,
    port: u16,
    queue_timestamp: u64,
) -> Node {
    let mut node = Node::new(identifier, address, port);
    if queue_timestamp > 0 {
        node.queue_timestamp = queue_timestamp;
    }
    node
}

// =============================================================================
// TESTS
// =============================================================================
