//! Meridian Mesh
//!
//! Peer-registry core of a Meridian verifier node: tracks the active mesh,
//! enforces one verifier per IP address, evicts unreachable peers after
//! consecutive connection failures, and blocks address-spoofing takeovers
//! while a displaced verifier is still active in recent consensus cycles.
//!
//! Also carries the thin bootstrap fragment that adopts a genesis block from
//! a node join response. Block storage, block validation, and transport are
//! consumed through narrow collaborator traits and live elsewhere in the
//! node.

pub mod consensus;
pub mod genesis;
pub mod network;
pub mod types;

#[cfg(test)]
mod tests;

pub use consensus::{CycleProvider, RecentCycleTracker, SharedCycleProvider};
pub use genesis::{BlockStore, BootstrapHandler, GenesisValidator, JoinResponse};
pub use network::{
    AddressError, MeshAddress, MeshEvent, MeshEventEmitter, MeshRegistry, Node, RegistryConfig,
    UpdateOutcome,
};
pub use types::{Block, BlockHash, BlockHeight, Timestamp, VerifierId, VerifierSignature};
